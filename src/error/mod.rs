//! Error types for starlog.
//!
//! Domain errors (configuration, telemetry payloads, white star tracking) are grouped in their
//! own enums and aggregated into [`Error`] together with the library errors that can surface
//! through the `?` operator.

pub mod config;
pub mod event;
pub mod tracker;

use thiserror::Error;

use crate::error::{config::ConfigError, event::EventError, tracker::TrackerError};

/// Main error type for starlog.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Telemetry errors (payloads that claim a known event type but do not match it)
/// - Tracker errors (unknown rank index, out of range match clock offsets)
/// - External library errors (database, JSON, scheduler)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Malformed telemetry payload.
    #[error(transparent)]
    EventError(#[from] EventError),
    /// White star elimination tracking error.
    #[error(transparent)]
    TrackerError(#[from] TrackerError),
    /// Internal error indicating a bug in starlog's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// JSON decoding error for raw telemetry input.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}
