//! Telemetry payload builders.
//!
//! Produce JSON objects shaped like the attachments the game webhook posts, so service tests
//! exercise the same classification path as production traffic.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A `{PlayerID, PlayerName}` entry named after its ID.
pub fn player(player_id: &str) -> Value {
    json!({
        "PlayerID": player_id,
        "PlayerName": format!("Player {}", player_id),
    })
}

/// A `{CorporationID, ...}` entry with fixed cosmetic indices.
pub fn corporation(corporation_id: &str) -> Value {
    json!({
        "CorporationID": corporation_id,
        "CorporationName": format!("Corporation {}", corporation_id),
        "SymbolIdx": 1,
        "BorderIdx": 2,
        "ColorIdx": 3,
        "Color2Idx": 4,
    })
}

pub fn red_star_started(star_id: &str, level: i32, at: DateTime<Utc>) -> Value {
    json!({
        "EventType": "RedStarStarted",
        "StarSystemID": star_id,
        "StarLevel": level,
        "DarkRedStar": false,
        "Timestamp": timestamp(at),
        "Players": [],
    })
}

pub fn red_star_ended(star_id: &str, at: DateTime<Utc>, points: i64, player_ids: &[&str]) -> Value {
    json!({
        "EventType": "RedStarEnded",
        "StarSystemID": star_id,
        "StarLevel": 10,
        "DarkRedStar": false,
        "Timestamp": timestamp(at),
        "RSEventPoints": points,
        "PlayersWhoContributed": player_ids.iter().map(|id| player(id)).collect::<Vec<_>>(),
    })
}

/// A `WhiteStarStarted` payload with corporations `"{id}-us"` and `"{id}-them"`.
pub fn white_star_started(
    white_star_id: &str,
    slot: i32,
    at: DateTime<Utc>,
    allies: &[&str],
    opponents: &[&str],
) -> Value {
    json!({
        "EventType": "WhiteStarStarted",
        "WhiteStarID": white_star_id,
        "Timestamp": timestamp(at),
        "Slot": slot,
        "IsUnderdog": false,
        "Corporation": corporation(&format!("{}-us", white_star_id)),
        "Opponent": corporation(&format!("{}-them", white_star_id)),
        "OurParticipants": allies.iter().map(|id| player(id)).collect::<Vec<_>>(),
        "OpponentParticipants": opponents.iter().map(|id| player(id)).collect::<Vec<_>>(),
    })
}

pub fn white_star_ended(
    white_star_id: &str,
    at: DateTime<Utc>,
    xp_gained: i64,
    our_score: i64,
    opponent_score: i64,
) -> Value {
    json!({
        "EventType": "WhiteStarEnded",
        "WhiteStarID": white_star_id,
        "Timestamp": timestamp(at),
        "XPGained": xp_gained,
        "OurScore": our_score,
        "OpponentScore": opponent_score,
    })
}
