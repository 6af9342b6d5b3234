//! Live white star view for the poll/elimination tracker.

use chrono::{DateTime, Duration, Utc};

use crate::model::db::CorporationModel;

pub use entity::ws_respawn::ShipType;

/// How long a white star match lasts after its start.
pub const WHITE_STAR_DURATION: Duration = Duration::days(5);

/// Time a destroyed ship of the given type needs before it can rejoin the match.
pub fn respawn_delay(ship_type: ShipType) -> Duration {
    match ship_type {
        ShipType::Battleship => Duration::hours(18),
        ShipType::Transport | ShipType::Miner => Duration::hours(9),
    }
}

/// A roster entry of one side of a white star.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPlayer {
    pub player_id: String,
    pub name: String,
    pub rank_index: i32,
}

/// A participant whose ship is currently destroyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elimination {
    pub player_id: String,
    pub name: String,
    pub rank_index: i32,
    pub ship_type: ShipType,
    pub respawns_at: DateTime<Utc>,
}

/// One corporation's side of an active white star.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WhiteStarSide {
    pub corporation: Option<CorporationModel>,
    /// Participants ordered by rank index.
    pub players: Vec<RankedPlayer>,
    /// Pending eliminations ordered by soonest respawn.
    pub down: Vec<Elimination>,
}

/// The white star currently fought in one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveWhiteStar {
    pub white_star_id: String,
    pub slot: i32,
    pub started_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub us: WhiteStarSide,
    pub them: WhiteStarSide,
}
