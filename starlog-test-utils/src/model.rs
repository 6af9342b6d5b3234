//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main starlog crate to keep fixture signatures short.

pub type PlayerModel = entity::player::Model;

pub type StarModel = entity::star::Model;

pub type ParticipationModel = entity::participation::Model;

pub type CorporationModel = entity::corporation::Model;

pub type WhiteStarModel = entity::white_star::Model;

pub type WsParticipationModel = entity::ws_participation::Model;
