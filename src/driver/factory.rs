//! Driver Factory Module
//!
//! Turns `(kind, params)` descriptors into concrete drivers. The stack
//! depends only on the [`DriverFactory`] trait; wiring beyond the standard
//! in-process kinds belongs to the embedding application.

use std::sync::Arc;

use serde::Deserialize;

use crate::config::{CacheConfig, DriverSpec};
use crate::driver::{CacheDriver, MemoryDriver};
use crate::error::{CacheError, Result};

// == Driver Factory Trait ==
/// Produces a cache driver from a descriptor.
pub trait DriverFactory: Send + Sync {
    /// Instantiates the driver described by `spec`.
    ///
    /// Unknown kinds and malformed parameter bags are configuration errors.
    fn create(&self, spec: &DriverSpec) -> Result<Arc<dyn CacheDriver>>;
}

// == Memory Params ==
/// Parameter bag accepted by the `"memory"` driver kind.
#[derive(Debug, Deserialize)]
struct MemoryParams {
    #[serde(default = "MemoryParams::default_max_entries")]
    max_entries: usize,
    /// Per-driver default lifetime override in seconds
    lifetime: Option<u64>,
}

impl MemoryParams {
    fn default_max_entries() -> usize {
        1000
    }
}

// == Standard Factory ==
/// Factory for the driver kinds shipped with the crate.
#[derive(Debug, Default)]
pub struct StandardFactory {
    config: CacheConfig,
}

impl StandardFactory {
    /// Creates a factory whose drivers fall back to the given defaults.
    pub fn new(config: CacheConfig) -> Self {
        Self { config }
    }
}

impl DriverFactory for StandardFactory {
    fn create(&self, spec: &DriverSpec) -> Result<Arc<dyn CacheDriver>> {
        match spec.kind.as_str() {
            "memory" => {
                let params: MemoryParams = if spec.params.is_null() {
                    MemoryParams {
                        max_entries: MemoryParams::default_max_entries(),
                        lifetime: None,
                    }
                } else {
                    serde_json::from_value(spec.params.clone()).map_err(|e| {
                        CacheError::Configuration(format!(
                            "Invalid params for memory driver: {}",
                            e
                        ))
                    })?
                };
                let lifetime = params.lifetime.unwrap_or(self.config.default_lifetime);
                Ok(Arc::new(MemoryDriver::new(params.max_entries, lifetime)))
            }
            other => Err(CacheError::Configuration(format!(
                "Unknown driver kind: {}",
                other
            ))),
        }
    }
}
