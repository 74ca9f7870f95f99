//! Tests for stop flags and deadlines

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::{Duration, Instant};

    use floortiles::algorithm::stop::StopSignal;

    #[test]
    fn test_default_signal_never_fires() {
        assert!(!StopSignal::never().should_stop());
        assert!(!StopSignal::default().should_stop());
    }

    // Tests the flag is observed after construction
    // Verified by copying the flag value at construction time
    #[test]
    fn test_flag_fires_when_raised() {
        let flag = Arc::new(AtomicBool::new(false));
        let signal = StopSignal::never().with_flag(Arc::clone(&flag));
        assert!(!signal.should_stop());

        flag.store(true, Ordering::Relaxed);
        assert!(signal.should_stop());
    }

    #[test]
    fn test_deadline_fires_once_reached() {
        let past = StopSignal::never().with_deadline(Instant::now());
        assert!(past.should_stop());

        let future = StopSignal::never().with_timeout(Duration::from_secs(3600));
        assert!(!future.should_stop());
    }
}
