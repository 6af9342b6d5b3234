//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// A player known from any event's participant list.
///
/// # Fields (from `entity::player::Model`)
/// - `id` - External player identifier
/// - `name` - Display name, refreshed whenever the player appears in an event
pub type PlayerModel = entity::player::Model;

/// A red star run.
///
/// # Fields (from `entity::star::Model`)
/// - `id` - External star system identifier
/// - `level` - Red star level
/// - `dark` - Whether the run was a dark red star
/// - `started_at` - Start of the run
/// - `ended_at` - End of the run, `None` while open
/// - `points` - Event points earned, `None` while open
/// - `player_count` - Number of contributors, `None` while open
pub type StarModel = entity::star::Model;

/// Link between a player and a red star they contributed to.
pub type ParticipationModel = entity::participation::Model;

/// A corporation seen in a white star, with its emblem indices.
pub type CorporationModel = entity::corporation::Model;

/// A white star match between our corporation and an opponent.
pub type WhiteStarModel = entity::white_star::Model;

/// A ranked roster entry of a white star.
pub type WsParticipationModel = entity::ws_participation::Model;

/// One recorded elimination and the time the ship comes back.
pub type WsRespawnModel = entity::ws_respawn::Model;

/// A persisted setting.
pub type VarModel = entity::var::Model;
