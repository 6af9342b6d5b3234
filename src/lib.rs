//! Telemetry ingestion and season leaderboards.
//!
//! Game telemetry events arrive as JSON payloads, are classified and applied to the relational
//! store, and feed per-season leaderboards plus a live view of the white star currently being
//! fought in each slot.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
