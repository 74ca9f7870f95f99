//! Terminal spinner reporting search progress

use std::sync::LazyLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::algorithm::observer::{SearchEvent, SearchObserver};
use crate::io::configuration::{PROGRESS_REFRESH_INTERVAL, PROGRESS_TICK_MS};

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner observer showing placements, backtracks and depth reached
///
/// The message is refreshed every `PROGRESS_REFRESH_INTERVAL` placements so
/// that drawing never dominates a fast search.
pub struct SearchProgress {
    bar: ProgressBar,
    cell_count: usize,
    placements: u64,
    backtracks: u64,
    deepest: usize,
}

impl SearchProgress {
    /// Create a visible spinner for a grid of `cell_count` cells
    pub fn new(cell_count: usize) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(format!("{cell_count} cells"));
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self::with_bar(bar, cell_count)
    }

    /// Create a progress tracker that draws nothing
    pub fn hidden(cell_count: usize) -> Self {
        Self::with_bar(ProgressBar::hidden(), cell_count)
    }

    fn with_bar(bar: ProgressBar, cell_count: usize) -> Self {
        Self {
            bar,
            cell_count,
            placements: 0,
            backtracks: 0,
            deepest: 0,
        }
    }

    /// Placements observed so far
    pub const fn placements(&self) -> u64 {
        self.placements
    }

    /// Backtracks observed so far
    pub const fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Largest number of cells filled at once
    pub const fn deepest(&self) -> usize {
        self.deepest
    }

    /// Current status line
    pub fn message(&self) -> String {
        format!(
            "depth {}/{} | {} placed | {} backtracks",
            self.deepest, self.cell_count, self.placements, self.backtracks
        )
    }

    fn refresh(&self) {
        self.bar.set_message(self.message());
    }
}

impl SearchObserver for SearchProgress {
    fn on_event(&mut self, event: &SearchEvent) {
        match event {
            SearchEvent::Placed { cell, .. } => {
                self.placements += 1;
                self.deepest = self.deepest.max(cell + 1);
                if self.placements % PROGRESS_REFRESH_INTERVAL == 0 {
                    self.refresh();
                }
            }
            SearchEvent::Backtracked { .. } => {
                self.backtracks += 1;
            }
            SearchEvent::Rejected { .. } => {}
            SearchEvent::Finished { .. } => {
                self.refresh();
                self.bar.finish_and_clear();
            }
        }
    }
}
