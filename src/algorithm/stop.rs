//! External stop requests checked between search steps

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Combined stop flag and deadline
///
/// The default signal never fires.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    flag: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl StopSignal {
    /// A signal that never fires
    pub fn never() -> Self {
        Self::default()
    }

    /// Fire once `flag` is set to true by another owner
    #[must_use]
    pub fn with_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.flag = Some(flag);
        self
    }

    /// Fire at `deadline`
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Fire once `timeout` has elapsed from now
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    /// Whether the search should stop now
    pub fn should_stop(&self) -> bool {
        self.flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
            || self
                .deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
    }
}
