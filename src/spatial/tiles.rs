//! Tile motifs and the candidate pool the search draws from
//!
//! A tile is four color identifiers, first bar to last bar. The pool is an
//! ordered, reusable list of tiles: the search tries it front to back at every
//! cell and never removes anything from it.

use std::fmt;

use crate::io::configuration::BARS_PER_TILE;
use crate::io::error::{Result, TilingError};

/// A four-bar tile; index 0 is the first bar and index 3 the last
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile([u32; BARS_PER_TILE]);

impl Tile {
    /// Create a tile from its four bar colors
    pub const fn new(bars: [u32; BARS_PER_TILE]) -> Self {
        Self(bars)
    }

    /// All bar colors, first to last
    pub const fn bars(&self) -> &[u32; BARS_PER_TILE] {
        &self.0
    }

    /// Color of bar 0
    pub const fn first(&self) -> u32 {
        self.0[0]
    }

    /// Color of bar 3
    pub const fn last(&self) -> u32 {
        self.0[BARS_PER_TILE - 1]
    }

    /// Whether any bar of this tile has `color`
    pub fn contains(&self, color: u32) -> bool {
        self.0.contains(&color)
    }
}

impl From<[u32; BARS_PER_TILE]> for Tile {
    fn from(bars: [u32; BARS_PER_TILE]) -> Self {
        Self(bars)
    }
}

impl TryFrom<&[u32]> for Tile {
    type Error = TilingError;

    fn try_from(bars: &[u32]) -> Result<Self> {
        let length = bars.len();
        <[u32; BARS_PER_TILE]>::try_from(bars)
            .ok()
            .map(Self)
            .ok_or(TilingError::InvalidTileLength { index: 0, length })
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "[{a},{b},{c},{d}]")
    }
}

/// Ordered, non-empty candidate pool; duplicates are allowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePool {
    tiles: Vec<Tile>,
}

impl TilePool {
    /// Create a pool from already-built tiles
    ///
    /// # Errors
    ///
    /// Returns `EmptyPool` if `tiles` is empty
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(TilingError::EmptyPool);
        }
        Ok(Self { tiles })
    }

    /// Create a pool from variable-length bar lists
    ///
    /// # Errors
    ///
    /// Returns `EmptyPool` for an empty list, or `InvalidTileLength` naming
    /// the first entry that does not have exactly four bars
    pub fn from_bar_lists<S: AsRef<[u32]>>(lists: &[S]) -> Result<Self> {
        let tiles = lists
            .iter()
            .enumerate()
            .map(|(index, bars)| {
                let bars = bars.as_ref();
                match Tile::try_from(bars) {
                    Err(TilingError::InvalidTileLength { length, .. }) => {
                        Err(TilingError::InvalidTileLength { index, length })
                    }
                    other => other,
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(tiles)
    }

    /// Tiles in trial order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles, duplicates included
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed pool
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at `index` in trial order
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    /// Iterate over tiles in trial order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Largest color identifier used by any tile
    pub fn max_color(&self) -> u32 {
        self.tiles
            .iter()
            .flat_map(|tile| tile.bars().iter().copied())
            .max()
            .unwrap_or(0)
    }
}

impl<const N: usize> TryFrom<[[u32; BARS_PER_TILE]; N]> for TilePool {
    type Error = TilingError;

    fn try_from(bars: [[u32; BARS_PER_TILE]; N]) -> Result<Self> {
        Self::new(bars.into_iter().map(Tile::new).collect())
    }
}
