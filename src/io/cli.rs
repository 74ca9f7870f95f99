//! Command-line interface wiring pool loading, search and rendering together

use crate::algorithm::assignment::Solution;
use crate::algorithm::constraint::CheckStrategy;
use crate::algorithm::observer::{
    LogObserver, ObserverChain, OutcomeKind, SearchStatistics,
};
use crate::algorithm::search::{SearchOutcome, Solver};
use crate::algorithm::stop::StopSignal;
use crate::io::configuration::{
    DEFAULT_CELL_PIXELS, DEFAULT_COLS, DEFAULT_OUTPUT_PATH, DEFAULT_PALETTE, DEFAULT_ROWS,
    DEFAULT_SEED,
};
use crate::io::error::Result;
use crate::io::image::export_solution_as_png;
use crate::io::pool::{PoolSource, shuffle_pool};
use crate::io::progress::SearchProgress;
use crate::spatial::grid::GridDimensions;
use crate::spatial::tiles::TilePool;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "floortiles")]
#[command(
    author,
    version,
    about = "Color a checkerboard of bar tiles so that touching bars never share a color"
)]
/// Command-line arguments for the tile map solver
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of grid rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of grid columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Solve an N x N grid instead of rows x cols
    #[arg(short = 'n', long, value_name = "N")]
    pub size: Option<usize>,

    /// Seed for shuffling the candidate pool
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Keep the candidate pool in its stored order
    #[arg(long)]
    pub no_shuffle: bool,

    /// Read the candidate pool from a file (one tile per line)
    #[arg(short, long, value_name = "FILE")]
    pub pool_file: Option<PathBuf>,

    /// Use the larger built-in pool intended for square grids
    #[arg(long)]
    pub square_pool: bool,

    /// Path of the rendered PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Edge length of one rendered cell in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_PIXELS)]
    pub cell_pixels: u32,

    /// Give up after this many seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Also check incoming edges when testing a candidate
    #[arg(long)]
    pub bidirectional: bool,

    /// Print the solved tile map to standard output
    #[arg(long)]
    pub print: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log search summaries
    #[arg(short, long)]
    pub verbose: bool,

    /// Log every candidate tried
    #[arg(long)]
    pub trace: bool,
}

impl Cli {
    /// Grid dimensions requested on the command line
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for zero or oversized sides
    pub fn dimensions(&self) -> Result<GridDimensions> {
        match self.size {
            Some(n) => GridDimensions::square(n),
            None => GridDimensions::new(self.rows, self.cols),
        }
    }

    /// Source of the candidate pool
    pub fn pool_source(&self) -> PoolSource {
        match (&self.pool_file, self.square_pool) {
            (Some(path), _) => PoolSource::File(path.clone()),
            (None, true) => PoolSource::Square,
            (None, false) => PoolSource::Default,
        }
    }

    /// Constraint check strategy
    pub const fn strategy(&self) -> CheckStrategy {
        if self.bidirectional {
            CheckStrategy::Bidirectional
        } else {
            CheckStrategy::Outgoing
        }
    }

    /// Default log level unless `RUST_LOG` overrides it
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.trace {
            log::LevelFilter::Trace
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Summary of one solver run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// How the search ended
    pub outcome: OutcomeKind,
    /// Search counters
    pub statistics: SearchStatistics,
    /// The solved map, if any
    pub solution: Option<Solution>,
    /// Where the map was rendered, if it was
    pub output: Option<PathBuf>,
    /// Wall-clock time of the search
    pub elapsed: Duration,
}

/// Runs one solve as configured by the command line
pub struct TileMapRunner {
    cli: Cli,
}

impl TileMapRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// The arguments this runner was built with
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Build the candidate pool, shuffled unless disabled
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be loaded
    pub fn prepare_pool(&self) -> Result<TilePool> {
        let pool = self.cli.pool_source().load()?;
        if self.cli.no_shuffle {
            return Ok(pool);
        }
        Ok(shuffle_pool(&pool, self.cli.seed))
    }

    /// Validate inputs, search and render the result
    ///
    /// # Errors
    ///
    /// Returns configuration errors before the search starts, and rendering
    /// errors after a successful search
    pub fn run(&self) -> Result<RunReport> {
        let dimensions = self.cli.dimensions()?;
        let pool = self.prepare_pool()?;

        log::info!(
            "solving {}x{} grid ({} cells) with {} candidate tiles",
            dimensions.rows(),
            dimensions.cols(),
            dimensions.cell_count(),
            pool.len()
        );
        log::debug!(
            "pool order: {}",
            pool.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        );

        let mut stop = StopSignal::never();
        if let Some(seconds) = self.cli.timeout {
            stop = stop.with_timeout(Duration::from_secs(seconds));
        }

        let progress = if self.cli.should_show_progress() {
            SearchProgress::new(dimensions.cell_count())
        } else {
            SearchProgress::hidden(dimensions.cell_count())
        };
        let mut observer = ObserverChain::new(progress, LogObserver);

        let start_time = Instant::now();
        let mut solver = Solver::new(dimensions, &pool)
            .with_strategy(self.cli.strategy())
            .with_stop_signal(stop)
            .with_observer(&mut observer);
        let outcome = solver.run();
        let statistics = solver.statistics();
        let elapsed = start_time.elapsed();

        let kind = outcome.kind();
        let mut output = None;
        let solution = match outcome {
            SearchOutcome::Solved(solution) => {
                export_solution_as_png(
                    &solution,
                    &DEFAULT_PALETTE,
                    self.cli.cell_pixels,
                    &self.cli.output,
                )?;
                log::info!(
                    "solved in {elapsed:.2?} after {} placements; wrote {}",
                    statistics.placements,
                    self.cli.output.display()
                );
                output = Some(self.cli.output.clone());
                Some(solution)
            }
            SearchOutcome::NoSolution => {
                log::warn!(
                    "no tile map exists for this pool ({} backtracks)",
                    statistics.backtracks
                );
                None
            }
            SearchOutcome::Cancelled => {
                log::warn!("search cancelled after {elapsed:.2?}");
                None
            }
        };

        Ok(RunReport {
            outcome: kind,
            statistics,
            solution,
            output,
            elapsed,
        })
    }
}
