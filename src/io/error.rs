//! Error types for configuration, pool loading and rendering

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tiling operations
///
/// An unsatisfiable or cancelled search is not an error: those are reported
/// through [`crate::algorithm::search::SearchOutcome`].
#[derive(Debug)]
pub enum TilingError {
    /// Grid dimensions outside the supported range
    InvalidDimensions {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
        /// Explanation of why the dimensions are rejected
        reason: String,
    },

    /// Candidate pool contains no tiles
    EmptyPool,

    /// A tile definition does not have exactly four bars
    InvalidTileLength {
        /// Position of the offending tile in its pool
        index: usize,
        /// Number of bars that were supplied
        length: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A line of a pool file could not be parsed
    PoolParse {
        /// One-based line number in the pool file
        line: usize,
        /// Description of what is wrong with the line
        reason: String,
    },

    /// A color identifier has no entry in the rendering palette
    UnknownColor {
        /// The color identifier found in a tile
        color: u32,
        /// Number of colors the palette defines
        palette_size: usize,
    },

    /// Failed to save rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl TilingError {
    /// Whether the error describes bad input detected before any search work
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. }
                | Self::EmptyPool
                | Self::InvalidTileLength { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols, reason } => {
                write!(f, "Invalid grid dimensions {rows}x{cols}: {reason}")
            }
            Self::EmptyPool => write!(f, "Candidate pool contains no tiles"),
            Self::InvalidTileLength { index, length } => {
                write!(f, "Tile {index} has {length} bars (expected 4)")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PoolParse { line, reason } => {
                write!(f, "Invalid pool entry on line {line}: {reason}")
            }
            Self::UnknownColor {
                color,
                palette_size,
            } => {
                write!(
                    f,
                    "Color {color} has no palette entry (palette defines {palette_size} colors)"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
