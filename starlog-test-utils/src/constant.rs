//! Shared test constants and timestamp helpers.
//!
//! Season 37 started at 2025-04-26T00:00:00Z; most fixtures are anchored to it so that
//! season arithmetic in tests stays readable.

use chrono::{DateTime, Duration, Utc};

/// Start of season 37, the reference season used by the season calendar.
pub static TEST_SEASON_START: &str = "2025-04-26T00:00:00Z";

/// Connection string for the per-test in-memory database.
pub static TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Returns the reference season start shifted by the given number of seconds.
///
/// # Panics
/// Panics if [`TEST_SEASON_START`] is not a valid RFC 3339 timestamp, which would be a bug
/// in the test utilities themselves.
pub fn at(offset_seconds: i64) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(TEST_SEASON_START)
        .expect("test season start is valid RFC 3339")
        .with_timezone(&Utc)
        + Duration::seconds(offset_seconds)
}
