//! Domain models shared between the data, service, and scheduler layers.

pub mod db;
pub mod event;
pub mod poll;
pub mod report;
pub mod white_star;
