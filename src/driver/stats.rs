//! Driver Statistics Module
//!
//! Tracks per-driver performance metrics including hits, misses, and evictions.
//! Counters are atomic so drivers can record from shared references.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Driver Stats ==
/// Atomic hit/miss/eviction counters owned by a driver.
#[derive(Debug, Default)]
pub struct DriverStats {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl DriverStats {
    // == Constructor ==
    /// Creates a new DriverStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Captures the current counters alongside the entry count.
    pub fn snapshot(&self, total_entries: usize) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            total_entries,
        }
    }
}

// == Stats Snapshot ==
/// Point-in-time view of a driver's metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsSnapshot {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key absent or stale)
    pub misses: u64,
    /// Number of entries evicted by the capacity policy
    pub evictions: u64,
    /// Current number of entries in the driver
    pub total_entries: usize,
}

impl StatsSnapshot {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let snapshot = DriverStats::new().snapshot(0);
        assert_eq!(snapshot.hits, 0);
        assert_eq!(snapshot.misses, 0);
        assert_eq!(snapshot.evictions, 0);
        assert_eq!(snapshot.total_entries, 0);
    }

    #[test]
    fn test_record_counters() {
        let stats = DriverStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.record_eviction();

        let snapshot = stats.snapshot(7);
        assert_eq!(snapshot.hits, 2);
        assert_eq!(snapshot.misses, 1);
        assert_eq!(snapshot.evictions, 1);
        assert_eq!(snapshot.total_entries, 7);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let snapshot = StatsSnapshot::default();
        assert_eq!(snapshot.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let stats = DriverStats::new();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.snapshot(1).hit_rate(), 0.5);
    }
}
