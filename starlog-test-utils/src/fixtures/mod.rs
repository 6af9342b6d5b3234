//! Test fixture modules for database records and telemetry payloads.
//!
//! - `red_star` - Players, stars, and participation rows
//! - `white_star` - Corporations, white stars, and ranked rosters
//! - `payload` - JSON telemetry payloads as delivered by the game webhook

pub mod payload;
pub mod red_star;
pub mod white_star;
