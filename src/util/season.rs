//! Season calendar arithmetic.
//!
//! Red star event seasons repeat on a fixed interval and each one lasts a fixed number of days.
//! Seasons are never stored; every timeframe is derived from a reference season whose start is
//! known. All functions here are pure so they can be used by both the ingest path and the
//! scheduler without touching the database.

use chrono::{DateTime, Duration, Utc};

/// Start of the reference season (2025-04-26T00:00:00Z) in seconds since the Unix epoch.
const REFERENCE_SEASON_START: i64 = 1_745_625_600;

/// Index of the season starting at [`REFERENCE_SEASON_START`].
const REFERENCE_SEASON_INDEX: i64 = 37;

const SEASON_INTERVAL_DAYS: i64 = 28;

const SEASON_DURATION_DAYS: i64 = 2;

/// Half-open interval `[starts_at, ends_at)` during which a season's event runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeframe {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl Timeframe {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.starts_at <= at && at < self.ends_at
    }
}

/// Maps wall-clock time to season indices and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonCalendar {
    reference_start: DateTime<Utc>,
    reference_index: i64,
    interval: Duration,
    duration: Duration,
}

impl Default for SeasonCalendar {
    fn default() -> Self {
        Self {
            reference_start: DateTime::<Utc>::UNIX_EPOCH
                + Duration::seconds(REFERENCE_SEASON_START),
            reference_index: REFERENCE_SEASON_INDEX,
            interval: Duration::days(SEASON_INTERVAL_DAYS),
            duration: Duration::days(SEASON_DURATION_DAYS),
        }
    }
}

impl SeasonCalendar {
    /// Builds a calendar from a known season start.
    ///
    /// `interval` must be positive and at least as long as `duration`, otherwise seasons would
    /// overlap.
    pub fn new(
        reference_start: DateTime<Utc>,
        reference_index: i64,
        interval: Duration,
        duration: Duration,
    ) -> Self {
        Self {
            reference_start,
            reference_index,
            interval,
            duration,
        }
    }

    /// Returns the timeframe of the given season.
    ///
    /// Works for seasons before the reference season too. Returns `None` when the season lies
    /// outside the range of representable dates.
    pub fn timeframe(&self, season: i64) -> Option<Timeframe> {
        let offset = season
            .checked_sub(self.reference_index)
            .and_then(|seasons| self.interval.num_milliseconds().checked_mul(seasons))
            .and_then(Duration::try_milliseconds)?;
        let starts_at = self.reference_start.checked_add_signed(offset)?;
        let ends_at = starts_at.checked_add_signed(self.duration)?;

        Some(Timeframe { starts_at, ends_at })
    }

    /// Returns the index of the season whose interval contains `now`.
    ///
    /// Uses floor division, so instants before the reference season resolve to earlier seasons
    /// rather than rounding toward it.
    pub fn current_season_index(&self, now: DateTime<Utc>) -> i64 {
        let elapsed = (now - self.reference_start).num_milliseconds();
        let interval = self.interval.num_milliseconds();

        self.reference_index + elapsed.div_euclid(interval)
    }

    /// Timeframe of the season `now` falls in.
    pub fn current_timeframe(&self, now: DateTime<Utc>) -> Option<Timeframe> {
        self.timeframe(self.current_season_index(now))
    }

    /// Whether the current season's event is running at `now`.
    pub fn is_within_active_window(&self, now: DateTime<Utc>) -> bool {
        self.current_timeframe(now)
            .is_some_and(|timeframe| timeframe.contains(now))
    }
}
