//! Background Tasks Module
//!
//! Periodic maintenance for drivers that keep their own TTL bookkeeping.

mod purge;

pub use purge::spawn_purge_task;
