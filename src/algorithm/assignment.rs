//! Per-cell tile assignment owned by a running search, and the completed solution

use std::fmt;

use crate::spatial::grid::{GridDimensions, Orientation};
use crate::spatial::tiles::Tile;

/// Content of one cell during search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot {
    /// No tile placed yet
    #[default]
    Unassigned,
    /// Tile committed after passing the constraint check
    Placed(Tile),
}

impl Slot {
    /// The placed tile, if any
    pub const fn tile(self) -> Option<Tile> {
        match self {
            Self::Unassigned => None,
            Self::Placed(tile) => Some(tile),
        }
    }
}

/// Mapping from cell index to slot, built incrementally by the search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    slots: Vec<Slot>,
}

impl Assignment {
    /// Create an assignment with every cell unassigned
    pub fn new(cell_count: usize) -> Self {
        Self {
            slots: vec![Slot::Unassigned; cell_count],
        }
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True for a grid without cells
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Tile placed at `cell`, or `None` if unassigned or out of range
    pub fn get(&self, cell: usize) -> Option<Tile> {
        self.slots.get(cell).copied().and_then(Slot::tile)
    }

    /// Slot of `cell`; out-of-range cells read as unassigned
    pub fn slot(&self, cell: usize) -> Slot {
        self.slots.get(cell).copied().unwrap_or_default()
    }

    /// Commit `tile` at `cell`
    pub fn place(&mut self, cell: usize, tile: Tile) {
        if let Some(slot) = self.slots.get_mut(cell) {
            *slot = Slot::Placed(tile);
        }
    }

    /// Reset `cell` to unassigned
    pub fn clear(&mut self, cell: usize) {
        if let Some(slot) = self.slots.get_mut(cell) {
            *slot = Slot::Unassigned;
        }
    }

    /// Convert into a solution if every cell holds a tile
    pub fn into_solution(self, dimensions: GridDimensions) -> Option<Solution> {
        if self.slots.len() != dimensions.cell_count() {
            return None;
        }
        let tiles = self
            .slots
            .into_iter()
            .map(Slot::tile)
            .collect::<Option<Vec<_>>>()?;
        Some(Solution { dimensions, tiles })
    }
}

/// Fully assigned grid: exactly one tile per cell in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    dimensions: GridDimensions,
    tiles: Vec<Tile>,
}

impl Solution {
    /// Grid dimensions the solution was found for
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at a cell index
    pub fn get(&self, cell: usize) -> Option<Tile> {
        self.tiles.get(cell).copied()
    }

    /// Tile at `(row, col)`
    pub fn at(&self, row: usize, col: usize) -> Option<Tile> {
        self.dimensions
            .cell_index(row, col)
            .and_then(|cell| self.get(cell))
    }

    /// Iterate over `(row, col, orientation, tile)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Orientation, Tile)> + '_ {
        self.tiles.iter().enumerate().map(|(cell, &tile)| {
            let (row, col) = self.dimensions.position(cell);
            (row, col, Orientation::at(row, col), tile)
        })
    }

    /// Consume the solution, returning its row-major tiles
    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.dimensions.cols();
        for (index, row) in self.tiles.chunks(cols).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}
