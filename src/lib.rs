//! Checkerboard bar-tile coloring by exhaustive backtracking search
//!
//! Every cell of a rectangular grid receives a four-bar tile. Cells alternate
//! between horizontal and vertical bar layouts in a checkerboard pattern, and
//! bars that touch across a cell border must never share a color. The crate
//! derives the orientation-dependent adjacency relation from the grid size,
//! then searches a fixed candidate pool depth-first for the first assignment
//! that satisfies every relation.

#![forbid(unsafe_code)]

/// Adjacency checks, backtracking search and search reporting
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid geometry, tiles and the adjacency relation graph
pub mod spatial;

pub use io::error::{Result, TilingError};
