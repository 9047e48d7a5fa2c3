//! TTL Purge Task
//!
//! Background task that periodically removes passively expired entries from a
//! memory driver. Entries stored with lifetime 0 are exempt.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::driver::MemoryDriver;

/// Spawns a background task that periodically purges expired entries.
///
/// The task loops forever, sleeping for the given interval between runs.
/// Abort the returned handle during shutdown.
///
/// # Arguments
/// * `driver` - Shared memory driver to purge
/// * `purge_interval_secs` - Interval in seconds between purge runs
pub fn spawn_purge_task(driver: Arc<MemoryDriver>, purge_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(purge_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL purge task with interval of {} seconds",
            purge_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = driver.purge_expired().await;

            if removed > 0 {
                info!("TTL purge: removed {} expired entries", removed);
            } else {
                debug!("TTL purge: no expired entries found");
            }
        }
    })
}
