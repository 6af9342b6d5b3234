//! White star matches, their corporations, ranked rosters, and recorded eliminations.

pub mod corporation;
pub mod participation;
pub mod respawn;
pub mod white_star;
