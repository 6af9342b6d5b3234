use serde_json::Value;

use crate::{
    error::event::EventError,
    model::event::{EventKind, TelemetryEvent, EVENT_TYPE_FIELD},
};

/// Result of inspecting a payload's `EventType` discriminator.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    /// A known event with every required field present.
    Event(TelemetryEvent),
    /// An `EventType` outside the known set.
    Unrecognized(String),
}

/// Maps a decoded payload to a typed event.
///
/// # Returns
/// - `Ok(Classified::Event(_))` - Known event type with a well-formed body
/// - `Ok(Classified::Unrecognized(_))` - Event type string that is not handled
/// - `Err(EventError::MissingEventType)` - Payload is not an object or lacks a string `EventType`
/// - `Err(EventError::Malformed { .. })` - Known event type whose fields are missing or mistyped
pub fn classify(payload: &Value) -> Result<Classified, EventError> {
    let event_type = payload
        .as_object()
        .and_then(|object| object.get(EVENT_TYPE_FIELD))
        .and_then(Value::as_str)
        .ok_or(EventError::MissingEventType)?;

    let Some(kind) = EventKind::from_event_type(event_type) else {
        return Ok(Classified::Unrecognized(event_type.to_string()));
    };

    let event = serde_json::from_value::<TelemetryEvent>(payload.clone()).map_err(|e| {
        EventError::Malformed {
            event_type: kind.event_type().to_string(),
            reason: e.to_string(),
        }
    })?;

    if let TelemetryEvent::DuelStarted(duel) = &event {
        if !(0..=1).contains(&duel.slot) {
            return Err(EventError::InvalidSlot(duel.slot));
        }
    }

    Ok(Classified::Event(event))
}
