//! Telemetry event payloads.
//!
//! The game webhook posts one JSON object per event, discriminated by its `EventType` field.
//! Each known event type maps to a variant of [`TelemetryEvent`] whose fields are required, so a
//! payload is either fully typed before it reaches the applier or rejected.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Name of the discriminator field on every telemetry payload.
pub static EVENT_TYPE_FIELD: &str = "EventType";

/// The closed set of event kinds the applier understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A red star run started.
    StarStarted,
    /// A red star run ended, carrying points and contributors.
    StarEnded,
    /// A white star match started, carrying both corporations and rosters.
    DuelStarted,
    /// A white star match ended, carrying the final scores.
    DuelEnded,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::StarStarted,
        EventKind::StarEnded,
        EventKind::DuelStarted,
        EventKind::DuelEnded,
    ];

    /// The `EventType` value used on the wire.
    pub fn event_type(self) -> &'static str {
        match self {
            EventKind::StarStarted => "RedStarStarted",
            EventKind::StarEnded => "RedStarEnded",
            EventKind::DuelStarted => "WhiteStarStarted",
            EventKind::DuelEnded => "WhiteStarEnded",
        }
    }

    pub fn from_event_type(event_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.event_type() == event_type)
    }

    /// Status code reported to the chat layer after a successful apply.
    pub fn status_code(self) -> i32 {
        match self {
            EventKind::StarStarted => 1,
            EventKind::StarEnded => 2,
            EventKind::DuelStarted => 3,
            EventKind::DuelEnded => 4,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_type())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "EventType")]
pub enum TelemetryEvent {
    #[serde(rename = "RedStarStarted")]
    StarStarted(StarStarted),
    #[serde(rename = "RedStarEnded")]
    StarEnded(StarEnded),
    #[serde(rename = "WhiteStarStarted")]
    DuelStarted(DuelStarted),
    #[serde(rename = "WhiteStarEnded")]
    DuelEnded(DuelEnded),
}

impl TelemetryEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            TelemetryEvent::StarStarted(_) => EventKind::StarStarted,
            TelemetryEvent::StarEnded(_) => EventKind::StarEnded,
            TelemetryEvent::DuelStarted(_) => EventKind::DuelStarted,
            TelemetryEvent::DuelEnded(_) => EventKind::DuelEnded,
        }
    }

    /// Identifier of the star or white star the event refers to.
    pub fn subject_id(&self) -> &str {
        match self {
            TelemetryEvent::StarStarted(e) => &e.star_id,
            TelemetryEvent::StarEnded(e) => &e.star_id,
            TelemetryEvent::DuelStarted(e) => &e.white_star_id,
            TelemetryEvent::DuelEnded(e) => &e.white_star_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerEntry {
    #[serde(rename = "PlayerID")]
    pub player_id: String,
    #[serde(rename = "PlayerName")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CorporationEntry {
    #[serde(rename = "CorporationID")]
    pub corporation_id: String,
    #[serde(rename = "CorporationName")]
    pub name: String,
    #[serde(rename = "SymbolIdx")]
    pub symbol: i32,
    #[serde(rename = "BorderIdx")]
    pub border: i32,
    #[serde(rename = "ColorIdx")]
    pub color_1: i32,
    #[serde(rename = "Color2Idx")]
    pub color_2: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StarStarted {
    #[serde(rename = "StarSystemID")]
    pub star_id: String,
    #[serde(rename = "StarLevel")]
    pub level: i32,
    #[serde(rename = "DarkRedStar")]
    pub dark: bool,
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StarEnded {
    #[serde(rename = "StarSystemID")]
    pub star_id: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "RSEventPoints")]
    pub points: i64,
    #[serde(rename = "PlayersWhoContributed")]
    pub contributors: Vec<PlayerEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DuelStarted {
    #[serde(rename = "WhiteStarID")]
    pub white_star_id: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "Slot")]
    pub slot: i32,
    #[serde(rename = "IsUnderdog")]
    pub underdog: bool,
    #[serde(rename = "Corporation")]
    pub corporation: CorporationEntry,
    #[serde(rename = "Opponent")]
    pub opponent: CorporationEntry,
    #[serde(rename = "OurParticipants")]
    pub allies: Vec<PlayerEntry>,
    #[serde(rename = "OpponentParticipants")]
    pub opponents: Vec<PlayerEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DuelEnded {
    #[serde(rename = "WhiteStarID")]
    pub white_star_id: String,
    #[serde(rename = "XPGained")]
    pub xp_gained: i64,
    #[serde(rename = "OurScore")]
    pub our_score: i64,
    #[serde(rename = "OpponentScore")]
    pub opponent_score: i64,
}

/// Collapses repeated player IDs into one entry, keeping the last name seen.
///
/// Order follows the first appearance of each ID.
pub fn dedupe_players(players: &[PlayerEntry]) -> Vec<PlayerEntry> {
    let mut deduped: Vec<PlayerEntry> = Vec::with_capacity(players.len());

    for player in players {
        match deduped.iter_mut().find(|p| p.player_id == player.player_id) {
            Some(existing) => existing.name = player.name.clone(),
            None => deduped.push(player.clone()),
        }
    }

    deduped
}
