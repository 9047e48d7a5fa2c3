//! Driver Module
//!
//! The shared `CacheDriver` capability implemented by every backend, plus the
//! concrete drivers shipped with the crate: the in-process [`MemoryDriver`]
//! and the [`Stack`] composite that chains several drivers into a
//! priority-ordered fallback stack.

mod entry;
mod factory;
mod memory;
mod stack;
mod stats;


// Re-export public types
pub use entry::CacheEntry;
pub use factory::{DriverFactory, StandardFactory};
pub use memory::MemoryDriver;
pub use stack::Stack;
pub use stats::{DriverStats, StatsSnapshot};

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::{CacheError, Result};

// == Public Constants ==
/// System-wide default lifetime in seconds for stored entries
pub const DEFAULT_LIFETIME: u64 = 86_400;

/// Conservative default lifetime in seconds for read-side freshness checks
/// (`get`/`exists` with an unspecified lifetime)
pub const DEFAULT_CHECK_LIFETIME: u64 = 1;

// == Cache Driver Trait ==
/// The uniform contract every cache backend implements.
///
/// Lifetimes are expressed in seconds as `Option<u64>`:
/// - `None` - unspecified; the driver substitutes its configured default
///   (writes) or [`DEFAULT_CHECK_LIFETIME`] (reads)
/// - `Some(0)` - never expire / accept any age
/// - `Some(n)` - expire `n` seconds after the value was written
///
/// A caller holds a single `CacheDriver` handle - either a leaf driver or a
/// [`Stack`] - and issues operations uniformly against it.
#[async_trait]
pub trait CacheDriver: Send + Sync {
    /// Driver identifier used in logs and backend errors.
    fn name(&self) -> &str;

    /// Retrieves the value for `key` if present and fresh under `lifetime`.
    ///
    /// Returns `Ok(None)` when the key is absent or stale; never encodes
    /// "not found" as a sentinel value.
    async fn get(&self, key: &str, lifetime: Option<u64>) -> Result<Option<String>>;

    /// Stores `data` under `key` with the given lifetime.
    async fn set(&self, key: &str, data: &str, lifetime: Option<u64>) -> Result<()>;

    /// Returns true iff a fresh entry is present under `lifetime`,
    /// without fetching the value.
    async fn exists(&self, key: &str, lifetime: Option<u64>) -> Result<bool>;

    /// Invalidates any entry for `key`, regardless of its lifetime.
    ///
    /// Idempotent: expiring an absent key succeeds.
    async fn expire(&self, key: &str) -> Result<()>;

    /// Retrieves the value for `key` and writes it to `sink` if found.
    ///
    /// Provided method built only on `get`; returns whether a value was
    /// found and emitted. Composites inherit it rather than overriding.
    async fn output(
        &self,
        key: &str,
        lifetime: Option<u64>,
        sink: &mut (dyn AsyncWrite + Send + Unpin),
    ) -> Result<bool> {
        match self.get(key, lifetime).await? {
            Some(value) => {
                sink.write_all(value.as_bytes())
                    .await
                    .map_err(|e| CacheError::backend(self.name(), e.to_string()))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
