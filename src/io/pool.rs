//! Candidate pool sources and seeded shuffling
//!
//! Pool files list one tile per line as four integers separated by commas
//! and/or whitespace. Blank lines and `#` comments are ignored.

use std::path::{Path, PathBuf};

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::io::configuration::{BARS_PER_TILE, DEFAULT_TILE_POOL, SQUARE_TILE_POOL};
use crate::io::error::{Result, TilingError};
use crate::spatial::tiles::{Tile, TilePool};

/// Where the candidate pool comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolSource {
    /// Built-in pool for rectangular grids
    Default,
    /// Built-in larger pool for square grids
    Square,
    /// Pool file on disk
    File(PathBuf),
}

impl PoolSource {
    /// Load the pool in its stored order
    ///
    /// # Errors
    ///
    /// Returns an error if the pool file cannot be read or parsed, or if it
    /// defines no tiles
    pub fn load(&self) -> Result<TilePool> {
        match self {
            Self::Default => TilePool::try_from(DEFAULT_TILE_POOL),
            Self::Square => TilePool::try_from(SQUARE_TILE_POOL),
            Self::File(path) => read_pool_file(path),
        }
    }
}

/// Read and parse a pool file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, otherwise the errors of
/// [`parse_pool`]
pub fn read_pool_file(path: &Path) -> Result<TilePool> {
    let text = std::fs::read_to_string(path).map_err(|e| TilingError::FileSystem {
        path: path.to_path_buf(),
        operation: "read pool file",
        source: e,
    })?;
    parse_pool(&text)
}

/// Parse pool text, one tile per line
///
/// # Errors
///
/// Returns `PoolParse` for a non-numeric entry, `InvalidTileLength` for a
/// line without exactly four colors and `EmptyPool` if no line defines a tile
pub fn parse_pool(text: &str) -> Result<TilePool> {
    let mut tiles = Vec::new();

    for (line_index, raw_line) in text.lines().enumerate() {
        let line = raw_line
            .split_once('#')
            .map_or(raw_line, |(content, _)| content)
            .trim();
        if line.is_empty() {
            continue;
        }

        let bars = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<u32>().map_err(|e| TilingError::PoolParse {
                    line: line_index + 1,
                    reason: format!("'{token}' is not a color identifier: {e}"),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if bars.len() != BARS_PER_TILE {
            return Err(TilingError::InvalidTileLength {
                index: tiles.len(),
                length: bars.len(),
            });
        }
        tiles.push(Tile::try_from(bars.as_slice())?);
    }

    TilePool::new(tiles)
}

/// Return a copy of `pool` permuted by a generator seeded with `seed`
///
/// The same seed always yields the same order.
pub fn shuffle_pool(pool: &TilePool, seed: u64) -> TilePool {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tiles = pool.tiles().to_vec();
    tiles.shuffle(&mut rng);
    TilePool::new(tiles).unwrap_or_else(|_| pool.clone())
}
