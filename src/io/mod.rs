//! Input/output operations and supporting configuration
//!
//! Everything outside the search core lives here: error types, constants,
//! pool loading, rendering, progress display and the command line.

/// Command-line interface and run orchestration
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types for all tiling operations
pub mod error;
/// PNG rendering of solved tile maps
pub mod image;
/// Candidate pool sources and seeded shuffling
pub mod pool;
/// Terminal progress display
pub mod progress;
