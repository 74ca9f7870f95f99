//! Exhaustive depth-first search over cells in row-major order
//!
//! The search keeps an explicit cursor per cell (the next pool index to try)
//! instead of recursing, so its stack use does not grow with the grid. At each
//! cell the pool is scanned in order from the cursor; the first admissible
//! tile is committed and the search moves on. A cell whose candidates run out
//! is cleared and the previous cell resumes with its next candidate.
//!
//! The first satisfying assignment in pool order is returned. Shuffling the
//! pool, if wanted, happens before the search is built.

use crate::algorithm::assignment::{Assignment, Solution};
use crate::algorithm::constraint::{CheckStrategy, find_conflict};
use crate::algorithm::observer::{OutcomeKind, SearchEvent, SearchObserver, SearchStatistics};
use crate::algorithm::stop::StopSignal;
use crate::io::error::Result;
use crate::spatial::grid::GridDimensions;
use crate::spatial::tiles::{Tile, TilePool};
use crate::spatial::topology::{EdgeSet, generate_edges};

/// Result of a completed search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A full, valid assignment
    Solved(Solution),
    /// No assignment exists for this pool and grid
    NoSolution,
    /// The stop signal fired; the partial assignment was discarded
    Cancelled,
}

impl SearchOutcome {
    /// How the run ended
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Solved(_) => OutcomeKind::Solved,
            Self::NoSolution => OutcomeKind::NoSolution,
            Self::Cancelled => OutcomeKind::Cancelled,
        }
    }

    /// Whether a solution was found
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// The solution, if one was found
    pub const fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::NoSolution | Self::Cancelled => None,
        }
    }

    /// Take the solution, if one was found
    pub fn into_solution(self) -> Option<Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::NoSolution | Self::Cancelled => None,
        }
    }
}

/// Configured backtracking search over one grid and pool
///
/// # Examples
///
/// ```
/// use floortiles::algorithm::search::Solver;
/// use floortiles::spatial::{GridDimensions, TilePool};
///
/// let pool = TilePool::try_from([[1, 2, 3, 4], [5, 6, 7, 8]])?;
/// let dimensions = GridDimensions::new(2, 2)?;
/// let outcome = Solver::new(dimensions, &pool).run();
/// assert!(outcome.is_solved());
/// # Ok::<(), floortiles::TilingError>(())
/// ```
pub struct Solver<'a> {
    dimensions: GridDimensions,
    pool: &'a TilePool,
    strategy: CheckStrategy,
    stop: StopSignal,
    observer: Option<&'a mut dyn SearchObserver>,
    statistics: SearchStatistics,
}

impl<'a> Solver<'a> {
    /// Create a search with the outgoing-edge check, no stop signal and no observer
    pub fn new(dimensions: GridDimensions, pool: &'a TilePool) -> Self {
        Self {
            dimensions,
            pool,
            strategy: CheckStrategy::Outgoing,
            stop: StopSignal::never(),
            observer: None,
            statistics: SearchStatistics::default(),
        }
    }

    /// Select which edges the constraint check walks
    #[must_use]
    pub const fn with_strategy(mut self, strategy: CheckStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Stop with [`SearchOutcome::Cancelled`] once `stop` fires
    #[must_use]
    pub fn with_stop_signal(mut self, stop: StopSignal) -> Self {
        self.stop = stop;
        self
    }

    /// Report events to `observer`
    #[must_use]
    pub fn with_observer(mut self, observer: &'a mut dyn SearchObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Counters of the most recent run
    pub const fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    /// Run the search to completion, exhaustion or cancellation
    pub fn run(&mut self) -> SearchOutcome {
        let edges = generate_edges(self.dimensions);
        let cell_count = self.dimensions.cell_count();
        let mut assignment = Assignment::new(cell_count);
        let mut cursors = vec![0_usize; cell_count];
        let mut cell = 0;
        self.statistics = SearchStatistics::default();

        let outcome = loop {
            if self.stop.should_stop() {
                break SearchOutcome::Cancelled;
            }

            if cell == cell_count {
                break assignment
                    .into_solution(self.dimensions)
                    .map_or(SearchOutcome::NoSolution, SearchOutcome::Solved);
            }

            let start = cursors.get(cell).copied().unwrap_or(0);
            if let Some((pool_index, tile)) = self.next_candidate(cell, start, &edges, &assignment)
            {
                assignment.place(cell, tile);
                if let Some(cursor) = cursors.get_mut(cell) {
                    *cursor = pool_index + 1;
                }
                self.statistics.placements += 1;
                self.statistics.deepest = self.statistics.deepest.max(cell + 1);
                self.emit(&SearchEvent::Placed {
                    cell,
                    pool_index,
                    tile,
                });
                cell += 1;
                continue;
            }

            assignment.clear(cell);
            if let Some(cursor) = cursors.get_mut(cell) {
                *cursor = 0;
            }
            self.statistics.backtracks += 1;
            self.emit(&SearchEvent::Backtracked { cell });

            if cell == 0 {
                break SearchOutcome::NoSolution;
            }
            cell -= 1;
            assignment.clear(cell);
        };

        self.emit(&SearchEvent::Finished {
            outcome: outcome.kind(),
            statistics: self.statistics,
        });
        outcome
    }

    // Scans the pool from `start`, reporting every refused candidate
    fn next_candidate(
        &mut self,
        cell: usize,
        start: usize,
        edges: &EdgeSet,
        assignment: &Assignment,
    ) -> Option<(usize, Tile)> {
        let pool = self.pool;
        for (pool_index, tile) in pool.iter().enumerate().skip(start) {
            match find_conflict(cell, tile, edges, assignment, self.strategy) {
                None => return Some((pool_index, *tile)),
                Some(conflict) => {
                    self.statistics.rejections += 1;
                    self.emit(&SearchEvent::Rejected {
                        cell,
                        pool_index,
                        tile: *tile,
                        conflict,
                    });
                }
            }
        }
        None
    }

    fn emit(&mut self, event: &SearchEvent) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_event(event);
        }
    }
}

/// Solve a `dimensions` grid with `pool` and default settings
pub fn solve_grid(dimensions: GridDimensions, pool: &TilePool) -> SearchOutcome {
    Solver::new(dimensions, pool).run()
}

/// Validate the inputs, then solve a `rows × cols` grid
///
/// # Errors
///
/// Returns a configuration error for zero or oversized dimensions or an
/// empty pool; no search work is done in that case
pub fn solve(rows: usize, cols: usize, pool: &[Tile]) -> Result<SearchOutcome> {
    let dimensions = GridDimensions::new(rows, cols)?;
    let pool = TilePool::new(pool.to_vec())?;
    Ok(solve_grid(dimensions, &pool))
}
