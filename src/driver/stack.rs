//! Stack Driver Module
//!
//! Composite driver chaining an ordered list of backends into a fallback
//! stack. Reads search front-to-back and stop at the first hit; writes and
//! invalidations run back-to-front with the last member as the authoritative
//! master.
//!
//! Failure policy: a member failing on `get`/`exists` degrades to a layer
//! miss. On `set`, only a master failure fails the operation; a failed
//! non-master is compensated with a best-effort `expire` so it cannot serve a
//! half-written value later. On `expire`, every member is invalidated but the
//! overall result is the master's alone.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::StackConfig;
use crate::driver::{CacheDriver, DriverFactory};
use crate::error::{CacheError, Result};

// == Stack ==
/// Priority-ordered fallback stack over a fixed list of cache drivers.
///
/// The member list is immutable after construction and never empty. Members
/// are ordered by ascending read priority; the last member is the master,
/// the sole source of truth for write and invalidation outcomes.
///
/// The stack holds no mutable state of its own, so concurrent calls are safe
/// at this layer. It provides no cross-driver atomicity: a `set` racing with
/// a `get` on the same key may observe partial propagation across tiers.
pub struct Stack {
    /// Member drivers in priority order; the last one is the master
    drivers: Vec<Arc<dyn CacheDriver>>,
}

impl Stack {
    // == Constructor ==
    /// Creates a stack over an ordered list of drivers.
    ///
    /// Fails with a configuration error when the list is empty.
    pub fn new(drivers: Vec<Arc<dyn CacheDriver>>) -> Result<Self> {
        if drivers.is_empty() {
            return Err(CacheError::Configuration(
                "Stack requires at least one driver".to_string(),
            ));
        }
        Ok(Self { drivers })
    }

    // == From Config ==
    /// Builds a stack from an ordered descriptor list, instantiating each
    /// member through the given factory.
    pub fn from_config(config: &StackConfig, factory: &dyn DriverFactory) -> Result<Self> {
        let drivers = config
            .drivers
            .iter()
            .map(|spec| factory.create(spec))
            .collect::<Result<Vec<_>>>()?;
        Self::new(drivers)
    }

    // == Members ==
    /// Number of member drivers.
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// Always false; construction rejects empty stacks.
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

#[async_trait]
impl CacheDriver for Stack {
    fn name(&self) -> &str {
        "stack"
    }

    /// Searches members front-to-back and returns the first hit.
    ///
    /// A member failure is a layer miss: it is logged and the search falls
    /// through to the next member.
    async fn get(&self, key: &str, lifetime: Option<u64>) -> Result<Option<String>> {
        for driver in &self.drivers {
            match driver.get(key, lifetime).await {
                Ok(Some(value)) => {
                    debug!(driver = driver.name(), key, "stack get hit");
                    return Ok(Some(value));
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(driver = driver.name(), key, error = %e, "stack get: member failed, falling through");
                }
            }
        }
        Ok(None)
    }

    /// Writes back-to-front, master first.
    ///
    /// A master failure aborts and fails the whole operation. A non-master
    /// failure is absorbed: the member gets a best-effort `expire` so it
    /// cannot serve stale state, and the walk continues.
    async fn set(&self, key: &str, data: &str, lifetime: Option<u64>) -> Result<()> {
        let master_index = self.drivers.len() - 1;

        for (index, driver) in self.drivers.iter().enumerate().rev() {
            match driver.set(key, data, lifetime).await {
                Ok(()) => {}
                Err(e) if index == master_index => {
                    warn!(driver = driver.name(), key, error = %e, "stack set: master write failed");
                    return Err(e);
                }
                Err(e) => {
                    warn!(driver = driver.name(), key, error = %e, "stack set: member write failed, invalidating");
                    if let Err(e) = driver.expire(key).await {
                        warn!(driver = driver.name(), key, error = %e, "stack set: compensating expire failed");
                    }
                }
            }
        }
        Ok(())
    }

    /// Checks members front-to-back; the first fresh hit wins.
    async fn exists(&self, key: &str, lifetime: Option<u64>) -> Result<bool> {
        for driver in &self.drivers {
            match driver.exists(key, lifetime).await {
                Ok(true) => return Ok(true),
                Ok(false) => {}
                Err(e) => {
                    warn!(driver = driver.name(), key, error = %e, "stack exists: member failed, falling through");
                }
            }
        }
        Ok(false)
    }

    /// Invalidates every member, master first; the overall result is the
    /// master's alone.
    async fn expire(&self, key: &str) -> Result<()> {
        let master_index = self.drivers.len() - 1;
        let mut master_result = Ok(());

        for (index, driver) in self.drivers.iter().enumerate().rev() {
            match driver.expire(key).await {
                Ok(()) => {}
                Err(e) if index == master_index => {
                    warn!(driver = driver.name(), key, error = %e, "stack expire: master failed");
                    master_result = Err(e);
                }
                Err(e) => {
                    warn!(driver = driver.name(), key, error = %e, "stack expire: member failed");
                }
            }
        }
        master_result
    }
}
