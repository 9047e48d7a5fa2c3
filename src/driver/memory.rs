//! Memory Driver Module
//!
//! In-process leaf driver backing the cache contract with a HashMap. The
//! medium has no native expiry, so the driver keeps its own TTL bookkeeping
//! per entry and offers a purge hook for the background task.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::driver::{CacheDriver, CacheEntry, DriverStats, StatsSnapshot, DEFAULT_CHECK_LIFETIME};
use crate::error::{CacheError, Result};

// == Limits ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

// == Memory Driver ==
/// In-memory cache driver with per-entry TTL and bounded capacity.
///
/// When an insert would exceed capacity, passively expired entries are purged
/// first; if the driver is still full, the oldest entry by write time is
/// evicted.
#[derive(Debug)]
pub struct MemoryDriver {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Performance statistics
    stats: DriverStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Default lifetime in seconds for entries stored without an explicit one
    default_lifetime: u64,
}

impl MemoryDriver {
    // == Constructor ==
    /// Creates a new MemoryDriver.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the driver can hold
    /// * `default_lifetime` - Default lifetime in seconds for `set` calls
    ///   that leave the lifetime unspecified
    pub fn new(max_entries: usize, default_lifetime: u64) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stats: DriverStats::new(),
            max_entries,
            default_lifetime,
        }
    }

    // == Purge Expired ==
    /// Removes all passively expired entries.
    ///
    /// Returns the number of entries removed. Entries stored with lifetime 0
    /// are never purged.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    // == Stats ==
    /// Returns a snapshot of the driver's statistics.
    pub async fn stats(&self) -> StatsSnapshot {
        let entries = self.entries.read().await;
        self.stats.snapshot(entries.len())
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the driver holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    // == Validation ==
    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(CacheError::InvalidRequest("Key must not be empty".into()));
        }
        if key.len() > MAX_KEY_LENGTH {
            return Err(CacheError::InvalidRequest(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }
        Ok(())
    }

    /// Evicts the oldest entry by write time. Caller holds the write lock.
    fn evict_oldest(&self, entries: &mut HashMap<String, CacheEntry>) {
        let oldest = entries
            .iter()
            .min_by_key(|(_, entry)| entry.written_at)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            entries.remove(&key);
            self.stats.record_eviction();
            debug!(driver = "memory", key = %key, "evicted oldest entry");
        }
    }
}

#[async_trait]
impl CacheDriver for MemoryDriver {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str, lifetime: Option<u64>) -> Result<Option<String>> {
        Self::validate_key(key)?;
        let read_lifetime = lifetime.unwrap_or(DEFAULT_CHECK_LIFETIME);

        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                // Stale under its own stored lifetime; drop it eagerly
                entries.remove(key);
                self.stats.record_miss();
                Ok(None)
            }
            Some(entry) if !entry.is_fresh(read_lifetime) => {
                // Still valid under its stored lifetime but too old for this
                // caller; keep the entry for less demanding readers
                self.stats.record_miss();
                Ok(None)
            }
            Some(entry) => {
                self.stats.record_hit();
                Ok(Some(entry.value.clone()))
            }
            None => {
                self.stats.record_miss();
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, data: &str, lifetime: Option<u64>) -> Result<()> {
        Self::validate_key(key)?;
        if data.len() > MAX_VALUE_SIZE {
            return Err(CacheError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        let effective_lifetime = lifetime.unwrap_or(self.default_lifetime);

        let mut entries = self.entries.write().await;

        // Make room for a new key if at capacity: purge expired entries
        // first, then fall back to evicting the oldest
        if !entries.contains_key(key) && entries.len() >= self.max_entries {
            entries.retain(|_, entry| !entry.is_expired());
            if entries.len() >= self.max_entries {
                self.evict_oldest(&mut entries);
            }
        }

        entries.insert(
            key.to_string(),
            CacheEntry::new(data.to_string(), effective_lifetime),
        );
        Ok(())
    }

    async fn exists(&self, key: &str, lifetime: Option<u64>) -> Result<bool> {
        Self::validate_key(key)?;
        let read_lifetime = lifetime.unwrap_or(DEFAULT_CHECK_LIFETIME);

        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .map(|entry| !entry.is_expired() && entry.is_fresh(read_lifetime))
            .unwrap_or(false))
    }

    async fn expire(&self, key: &str) -> Result<()> {
        Self::validate_key(key)?;

        // Idempotent: removing an absent key is still a success
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}
