//! Telemetry event ingestion.
//!
//! [`EventService::apply`] classifies one decoded payload and executes the writes of its event
//! kind. Every multi-row write runs in a single transaction so a failed apply leaves nothing
//! behind. The chat layer consumes the result as an [`ApplyReport`].

pub mod classify;
mod red_star;
mod white_star;

use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::{
    config::StartedEventPolicy,
    error::Error,
    model::event::{EventKind, TelemetryEvent},
    service::event::classify::{classify, Classified},
};

/// Status reported for a payload whose `EventType` is not handled.
pub const UNRECOGNIZED_STATUS: i32 = -1;

/// Status reported for a payload that failed to apply.
pub const FAILED_STATUS: i32 = 0;

/// What a successful apply did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The event's writes were committed.
    Applied(EventKind),
    /// The event type is not handled; nothing was written.
    Unrecognized(String),
}

impl ApplyOutcome {
    pub fn status(&self) -> i32 {
        match self {
            ApplyOutcome::Applied(kind) => kind.status_code(),
            ApplyOutcome::Unrecognized(_) => UNRECOGNIZED_STATUS,
        }
    }
}

/// Status code and optional error handed back to the chat layer after each payload.
#[derive(Debug)]
pub struct ApplyReport {
    pub status: i32,
    pub error: Option<Error>,
}

impl ApplyReport {
    /// Whether the applied event closes a red star, which changes the current leaderboard.
    pub fn refreshes_leaderboard(&self) -> bool {
        self.status == EventKind::StarEnded.status_code()
    }
}

impl From<Result<ApplyOutcome, Error>> for ApplyReport {
    fn from(result: Result<ApplyOutcome, Error>) -> Self {
        match result {
            Ok(outcome) => Self {
                status: outcome.status(),
                error: None,
            },
            Err(e) => Self {
                status: FAILED_STATUS,
                error: Some(e),
            },
        }
    }
}

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    started_event_policy: StartedEventPolicy,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of [`EventService`] rejecting re-delivered "started" events
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            started_event_policy: StartedEventPolicy::default(),
        }
    }

    pub fn with_started_event_policy(mut self, policy: StartedEventPolicy) -> Self {
        self.started_event_policy = policy;
        self
    }

    /// Classifies a decoded payload and applies its writes.
    ///
    /// # Returns
    /// - `Ok(ApplyOutcome::Applied(_))` - Writes for the event kind were committed
    /// - `Ok(ApplyOutcome::Unrecognized(_))` - Unknown `EventType`, nothing was written
    /// - `Err(Error::EventError(_))` - Payload without a discriminator or with malformed fields
    /// - `Err(Error::DbErr(_))` - Constraint violation or store failure, nothing was committed
    pub async fn apply(&self, payload: &Value) -> Result<ApplyOutcome, Error> {
        let event = match classify(payload)? {
            Classified::Event(event) => event,
            Classified::Unrecognized(event_type) => {
                tracing::warn!("Ignoring telemetry event with unrecognized type {}", event_type);
                return Ok(ApplyOutcome::Unrecognized(event_type));
            }
        };

        let kind = event.kind();
        match &event {
            TelemetryEvent::StarStarted(e) => self.start_star(e).await?,
            TelemetryEvent::StarEnded(e) => self.end_star(e).await?,
            TelemetryEvent::DuelStarted(e) => self.start_white_star(e).await?,
            TelemetryEvent::DuelEnded(e) => self.end_white_star(e).await?,
        }

        tracing::info!("Applied {} event for {}", kind, event.subject_id());

        Ok(ApplyOutcome::Applied(kind))
    }

    /// Decodes a raw JSON document and applies it.
    pub async fn apply_json(&self, raw: &str) -> Result<ApplyOutcome, Error> {
        let payload: Value = serde_json::from_str(raw)?;

        self.apply(&payload).await
    }

    /// Applies payloads in order, continuing past failures.
    ///
    /// Used to catch up on events delivered while the service was down. Returns one report per
    /// payload in input order.
    pub async fn replay(&self, payloads: &[Value]) -> Vec<ApplyReport> {
        let mut reports = Vec::with_capacity(payloads.len());

        for (position, payload) in payloads.iter().enumerate() {
            let report = ApplyReport::from(self.apply(payload).await);
            if let Some(e) = &report.error {
                tracing::error!("Failed to replay payload {}: {}", position, e);
            }
            reports.push(report);
        }

        let failed = reports.iter().filter(|r| r.error.is_some()).count();
        tracing::info!(
            "Replayed {} payloads, {} failed",
            reports.len(),
            failed
        );

        reports
    }
}
