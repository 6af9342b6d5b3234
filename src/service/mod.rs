//! Service layer for event ingestion, leaderboards, and white star tracking.
//!
//! Services own the multi-step operations: they open transactions, combine repositories, and
//! turn raw query results into the models handed to callers.

pub mod event;
pub mod poll;
pub mod report;
pub mod tracker;
