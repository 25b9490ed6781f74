//! Channel write metrics
//!
//! Counters for lines delivered by a channel and for sink writes that failed,
//! so a caller can tell whether a log file is missing lines.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters for one channel.
///
/// # Example
///
/// ```
/// use timed_logger::ChannelMetrics;
///
/// let metrics = ChannelMetrics::new();
/// metrics.record_written();
/// metrics.record_failed();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.failed_writes(), 1);
/// ```
#[derive(Debug)]
pub struct ChannelMetrics {
    /// Events accepted by every sink that saw them
    lines_written: AtomicU64,

    /// Events where at least one sink returned an error or panicked
    failed_writes: AtomicU64,

    /// Events below every sink threshold
    filtered: AtomicU64,
}

impl ChannelMetrics {
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            failed_writes: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    /// Record a delivered event, returning the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed delivery, returning the previous count
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_writes.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed writes as a percentage (0.0 - 100.0) of delivered + failed events
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_writes() as f64;
        let total = self.lines_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }
}

impl Default for ChannelMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ChannelMetrics {
    /// Snapshot of the current values
    fn clone(&self) -> Self {
        Self {
            lines_written: AtomicU64::new(self.lines_written()),
            failed_writes: AtomicU64::new(self.failed_writes()),
            filtered: AtomicU64::new(self.filtered()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = ChannelMetrics::new();
        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.failed_writes(), 0);
        assert_eq!(metrics.filtered(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = ChannelMetrics::new();
        assert_eq!(metrics.record_failed(), 0);
        assert_eq!(metrics.record_failed(), 1);
        assert_eq!(metrics.failed_writes(), 2);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = ChannelMetrics::new();
        assert_eq!(metrics.failure_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_written();
        }
        for _ in 0..10 {
            metrics.record_failed();
        }

        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }

    #[test]
    fn test_clone_is_snapshot() {
        let metrics = ChannelMetrics::new();
        metrics.record_written();

        let snapshot = metrics.clone();
        metrics.record_written();

        assert_eq!(snapshot.lines_written(), 1);
        assert_eq!(metrics.lines_written(), 2);
    }
}
