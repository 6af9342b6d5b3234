//! Pure helpers shared by services and the scheduler.

pub mod season;
