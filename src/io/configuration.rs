//! Solver constants and runtime configuration defaults

/// Number of bars in every tile
pub const BARS_PER_TILE: usize = 4;

/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// The edge set holds each directed edge three times plus two lists per cell,
// a few hundred bytes per cell, so this bounds it to a few hundred megabytes
/// Maximum allowed number of cells (`rows * cols`)
pub const MAX_CELL_COUNT: usize = 1_000_000;

// Default values for configurable parameters
/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 5;
/// Default number of grid columns
pub const DEFAULT_COLS: usize = 7;
/// Fixed seed for reproducible pool shuffling
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Default path of the rendered tile map
pub const DEFAULT_OUTPUT_PATH: &str = "tile_map.png";
/// Default edge length of one rendered cell in pixels
pub const DEFAULT_CELL_PIXELS: u32 = 64;

// Progress display settings
/// Placements between two progress refreshes
pub const PROGRESS_REFRESH_INTERVAL: u64 = 1024;
/// Interval of the spinner's steady tick in milliseconds
pub const PROGRESS_TICK_MS: u64 = 120;

/// RGBA colors indexed by color identifier: black, green, red, blue, grey, beige
pub const DEFAULT_PALETTE: [[u8; 4]; 6] = [
    [0, 0, 0, 255],
    [0, 128, 0, 255],
    [255, 0, 0, 255],
    [0, 0, 255, 255],
    [128, 128, 128, 255],
    [245, 245, 220, 255],
];

/// Candidate pool used for rectangular grids
pub const DEFAULT_TILE_POOL: [[u32; 4]; 16] = [
    [2, 4, 1, 3],
    [3, 1, 4, 5],
    [5, 1, 0, 2],
    [0, 1, 2, 5],
    [5, 2, 1, 0],
    [2, 4, 1, 3],
    [3, 1, 4, 2],
    [3, 1, 2, 5],
    [5, 2, 1, 3],
    [3, 1, 4, 5],
    [5, 4, 1, 3],
    [3, 0, 1, 5],
    [5, 1, 0, 3],
    [3, 1, 2, 5],
    [3, 0, 1, 5],
    [2, 0, 1, 5],
];

/// Larger candidate pool used for square grids
pub const SQUARE_TILE_POOL: [[u32; 4]; 24] = [
    [3, 1, 4, 5],
    [5, 4, 1, 3],
    [3, 1, 4, 2],
    [2, 4, 1, 3],
    [3, 2, 4, 1],
    [1, 4, 2, 3],
    [4, 2, 1, 3],
    [3, 1, 2, 4],
    [2, 3, 1, 4],
    [4, 1, 3, 2],
    [2, 3, 0, 4],
    [4, 0, 3, 2],
    [2, 0, 1, 5],
    [5, 1, 0, 2],
    [0, 1, 2, 5],
    [5, 2, 1, 0],
    [2, 4, 1, 3],
    [3, 1, 4, 2],
    [3, 1, 2, 5],
    [5, 2, 1, 3],
    [3, 1, 4, 5],
    [5, 4, 1, 3],
    [3, 0, 1, 5],
    [5, 1, 0, 3],
];
