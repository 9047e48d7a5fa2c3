//! Cache Entry Module
//!
//! Defines the structure leaf drivers use to keep their own TTL bookkeeping
//! when the underlying medium has no native expiry.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single stored entry with its write timestamp and lifetime.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Write timestamp (Unix milliseconds)
    pub written_at: u64,
    /// Lifetime in seconds; 0 means the entry never expires passively
    pub lifetime: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry written now.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `lifetime` - Lifetime in seconds (0 = never expire)
    pub fn new(value: String, lifetime: u64) -> Self {
        Self {
            value,
            written_at: current_timestamp_ms(),
            lifetime,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry is stale under its own stored lifetime.
    ///
    /// This governs passive expiry (garbage collection). Entries stored with
    /// lifetime 0 are exempt and only disappear through an explicit expire.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to `written_at + lifetime`.
    pub fn is_expired(&self) -> bool {
        if self.lifetime == 0 {
            return false;
        }
        current_timestamp_ms() >= self.written_at + self.lifetime * 1000
    }

    // == Is Fresh ==
    /// Checks whether the entry is fresh under a read-side lifetime.
    ///
    /// Freshness is measured against the entry's write timestamp. Entries
    /// stored with lifetime 0 are always fresh, and a read lifetime of 0
    /// accepts an entry of any age.
    ///
    /// # Arguments
    /// * `read_lifetime` - Caller-supplied lifetime in seconds (0 = any age)
    pub fn is_fresh(&self, read_lifetime: u64) -> bool {
        if self.lifetime == 0 || read_lifetime == 0 {
            return true;
        }
        current_timestamp_ms() < self.written_at + read_lifetime * 1000
    }

    // == Age ==
    /// Returns the entry's age in milliseconds.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.written_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub(crate) fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
