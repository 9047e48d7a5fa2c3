//! Cache Stack - A pluggable caching abstraction
//!
//! Provides a uniform get/set/exists/expire contract implemented by
//! interchangeable backend drivers, plus a [`Stack`] composite that chains
//! several drivers into a priority-ordered fallback stack: reads search
//! front-to-back and stop at the first hit, writes and invalidations run
//! back-to-front with the last driver acting as the authoritative master.

pub mod config;
pub mod driver;
pub mod error;
pub mod tasks;

pub use config::{CacheConfig, DriverSpec, StackConfig};
pub use driver::{
    CacheDriver, DriverFactory, MemoryDriver, Stack, StandardFactory, DEFAULT_CHECK_LIFETIME,
    DEFAULT_LIFETIME,
};
pub use error::{CacheError, Result};
pub use tasks::spawn_purge_task;
