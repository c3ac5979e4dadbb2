//! Sink metrics for observability
//!
//! Native sinks are fire-and-forget, so delivery problems never reach the
//! caller. These counters make them visible.

use super::log_level::Level;
use std::sync::atomic::{AtomicU64, Ordering};

/// Delivery counters for a native sink
///
/// # Example
///
/// ```
/// use native_log_handler::SinkMetrics;
///
/// let metrics = SinkMetrics::new();
///
/// metrics.record_dropped();
/// metrics.record_emitted();
///
/// assert_eq!(metrics.dropped_count(), 1);
/// assert_eq!(metrics.total_emitted(), 1);
/// ```
#[derive(Debug)]
pub struct SinkMetrics {
    /// Records handed to the sink and delivered
    total_emitted: AtomicU64,

    /// Records the sink could not deliver
    dropped_count: AtomicU64,

    /// Delivered records per severity, indexed by `Level as usize`
    per_level: [AtomicU64; 7],
}

impl SinkMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_emitted: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
            per_level: [
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
            ],
        }
    }

    #[inline]
    pub fn total_emitted(&self) -> u64 {
        self.total_emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    /// Delivered records at `level`
    #[inline]
    pub fn emitted_at(&self, level: Level) -> u64 {
        self.per_level[level as usize].load(Ordering::Relaxed)
    }

    /// Record a delivered entry, returning the previous total
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.total_emitted.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a delivered entry at a specific severity
    #[inline]
    pub fn record_emitted_at(&self, level: Level) -> u64 {
        self.per_level[level as usize].fetch_add(1, Ordering::Relaxed);
        self.record_emitted()
    }

    /// Record a dropped entry, returning the previous count
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped_count.fetch_add(1, Ordering::Relaxed)
    }

    /// Percentage of records dropped
    ///
    /// Returns 0.0 if nothing has been handed to the sink.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.total_emitted() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.total_emitted.store(0, Ordering::Relaxed);
        self.dropped_count.store(0, Ordering::Relaxed);
        for counter in &self.per_level {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

impl Default for SinkMetrics {
    fn default() -> Self {
        Self::new()
    }
}
