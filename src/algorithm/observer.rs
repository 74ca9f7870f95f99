//! Side-channel reporting of search progress
//!
//! Observers see every candidate the search tries, every placement and every
//! backtrack. They receive events by shared reference and have no way to
//! steer the search, so a run produces the same outcome with or without them.

use crate::algorithm::constraint::Conflict;
use crate::spatial::tiles::Tile;

/// How a search run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// Every cell holds a tile
    Solved,
    /// The candidate pool was exhausted at the first cell
    NoSolution,
    /// The stop signal fired before the search finished
    Cancelled,
}

impl OutcomeKind {
    /// Lowercase label for messages
    pub const fn label(self) -> &'static str {
        match self {
            Self::Solved => "solved",
            Self::NoSolution => "no solution",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Counters accumulated over one search run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Tiles committed to a cell
    pub placements: u64,
    /// Candidates refused by the constraint check
    pub rejections: u64,
    /// Cells whose candidates ran out
    pub backtracks: u64,
    /// Largest number of cells filled at once
    pub deepest: usize,
}

/// Event emitted by the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// A candidate clashed with an assigned neighbor
    Rejected {
        /// Cell being filled
        cell: usize,
        /// Position of the candidate in the pool
        pool_index: usize,
        /// The refused candidate
        tile: Tile,
        /// The edge that ruled it out
        conflict: Conflict,
    },
    /// A candidate passed the check and was committed
    Placed {
        /// Cell being filled
        cell: usize,
        /// Position of the tile in the pool
        pool_index: usize,
        /// The committed tile
        tile: Tile,
    },
    /// No remaining candidate fits `cell`; the search steps back
    Backtracked {
        /// Cell that was cleared
        cell: usize,
    },
    /// The run terminated
    Finished {
        /// How it ended
        outcome: OutcomeKind,
        /// Final counters
        statistics: SearchStatistics,
    },
}

/// Receiver of search events
pub trait SearchObserver {
    /// Handle one event
    fn on_event(&mut self, event: &SearchEvent);
}

impl<F> SearchObserver for F
where
    F: FnMut(&SearchEvent),
{
    fn on_event(&mut self, event: &SearchEvent) {
        self(event);
    }
}

/// Forwards each event to two observers in turn
#[derive(Debug, Default)]
pub struct ObserverChain<A, B> {
    first: A,
    second: B,
}

impl<A, B> ObserverChain<A, B> {
    /// Chain two observers
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: SearchObserver, B: SearchObserver> SearchObserver for ObserverChain<A, B> {
    fn on_event(&mut self, event: &SearchEvent) {
        self.first.on_event(event);
        self.second.on_event(event);
    }
}

/// Narrates the search through the `log` facade
///
/// Candidate-level events go to `trace`, the final outcome to `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_event(&mut self, event: &SearchEvent) {
        match *event {
            SearchEvent::Rejected {
                cell,
                pool_index,
                tile,
                conflict,
            } => {
                log::trace!(
                    "cell {cell}: tile {tile} (#{pool_index}) conflicts with neighbor {} {} via {}",
                    conflict.neighbor,
                    conflict.neighbor_tile,
                    conflict.kind
                );
            }
            SearchEvent::Placed {
                cell,
                pool_index,
                tile,
            } => {
                log::trace!("cell {cell}: placed tile {tile} (#{pool_index})");
            }
            SearchEvent::Backtracked { cell } => {
                log::trace!("cell {cell}: candidates exhausted, backtracking");
            }
            SearchEvent::Finished {
                outcome,
                statistics,
            } => {
                log::debug!(
                    "search {}: {} placements, {} rejections, {} backtracks, deepest {}",
                    outcome.label(),
                    statistics.placements,
                    statistics.rejections,
                    statistics.backtracks,
                    statistics.deepest
                );
            }
        }
    }
}
