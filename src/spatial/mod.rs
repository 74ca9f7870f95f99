//! Spatial data structures and grid topology
//!
//! This module contains spatial-related functionality including:
//! - Grid dimensions, cell indexing and orientation
//! - Tile motifs and candidate pools
//! - Generation of the directed adjacency edge set

/// Grid dimensions, cell indexing and checkerboard orientation
pub mod grid;
/// Tile motifs and candidate pools
pub mod tiles;
/// Directed adjacency edges and relation kinds
pub mod topology;

pub use grid::{Direction, GridDimensions, Orientation};
pub use tiles::{Tile, TilePool};
pub use topology::{AdjacencyEdge, EdgeSet, RelationKind, generate_edges};
