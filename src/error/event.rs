use thiserror::Error;

/// Errors raised while classifying a telemetry payload.
///
/// An `EventType` that is simply unknown is not an error; it is reported as an unrecognized
/// outcome instead. These variants cover payloads that cannot be dispatched at all or that
/// name a known event type without carrying its fields.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("Telemetry payload is not an object with a string EventType field")]
    MissingEventType,
    #[error("Malformed {event_type} payload: {reason}")]
    Malformed { event_type: String, reason: String },
    #[error("White star slot must be 0 or 1, got {0}")]
    InvalidSlot(i32),
}
