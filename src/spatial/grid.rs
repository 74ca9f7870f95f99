//! Grid dimensions, row-major cell indexing and checkerboard orientation
//!
//! Cells are numbered `row * cols + col`. Orientation is never stored: it is
//! a pure function of position, so the solver and any renderer derive it the
//! same way.

use crate::io::configuration::{MAX_CELL_COUNT, MAX_GRID_DIMENSION};
use crate::io::error::{Result, TilingError};

/// Bar layout of a cell, fixed by its position in the checkerboard
///
/// Vertical cells show their bars as side-by-side strips, first bar on the
/// left. Horizontal cells stack their bars, first bar on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Bars run left to right as stacked strips (`(row + col)` even)
    Horizontal,
    /// Bars run top to bottom as adjacent strips (`(row + col)` odd)
    Vertical,
}

impl Orientation {
    /// Orientation of the cell at `(row, col)`
    pub const fn at(row: usize, col: usize) -> Self {
        if (row + col) % 2 == 1 {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Whether the cell lays its bars out vertically
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

/// One of the four geometric neighbor directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Next column
    Right,
    /// Previous column
    Left,
    /// Previous row
    Up,
    /// Next row
    Down,
}

impl Direction {
    /// Neighbor directions in the order edges are emitted
    pub const ALL: [Self; 4] = [Self::Right, Self::Left, Self::Up, Self::Down];
}

/// Validated rectangular grid size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    rows: usize,
    cols: usize,
}

impl GridDimensions {
    /// Create validated grid dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either side is zero or exceeds
    /// `MAX_GRID_DIMENSION`, or if the grid has more than `MAX_CELL_COUNT` cells
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(TilingError::InvalidDimensions {
                rows,
                cols,
                reason: "rows and cols must both be at least 1".to_string(),
            });
        }
        if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
            return Err(TilingError::InvalidDimensions {
                rows,
                cols,
                reason: format!("each side must be at most {MAX_GRID_DIMENSION}"),
            });
        }
        if rows * cols > MAX_CELL_COUNT {
            return Err(TilingError::InvalidDimensions {
                rows,
                cols,
                reason: format!("grid must have at most {MAX_CELL_COUNT} cells"),
            });
        }
        Ok(Self { rows, cols })
    }

    /// Create an `n × n` grid
    ///
    /// # Errors
    ///
    /// Same conditions as [`GridDimensions::new`]
    pub fn square(n: usize) -> Result<Self> {
        Self::new(n, n)
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major index of `(row, col)`, or `None` outside the grid
    pub const fn cell_index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// `(row, col)` of a cell index
    pub const fn position(&self, cell: usize) -> (usize, usize) {
        (cell / self.cols, cell % self.cols)
    }

    /// Orientation of a cell index
    pub const fn orientation(&self, cell: usize) -> Orientation {
        let (row, col) = self.position(cell);
        Orientation::at(row, col)
    }

    /// Index of the neighbor in `direction`, if it lies inside the grid
    pub const fn neighbor(&self, cell: usize, direction: Direction) -> Option<usize> {
        let (row, col) = self.position(cell);
        match direction {
            Direction::Right => self.cell_index(row, col + 1),
            Direction::Left => {
                if col == 0 {
                    None
                } else {
                    Some(cell - 1)
                }
            }
            Direction::Up => {
                if row == 0 {
                    None
                } else {
                    Some(cell - self.cols)
                }
            }
            Direction::Down => self.cell_index(row + 1, col),
        }
    }

    /// Number of unordered adjacent cell pairs
    pub const fn adjacent_pair_count(&self) -> usize {
        self.rows * (self.cols - 1) + self.cols * (self.rows - 1)
    }
}
