//! Leaderboard models handed to the rendering layer.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::model::db::StarModel;

/// How a metric value should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Event points (possibly per minute or per run).
    Score,
    /// Seconds of play.
    Duration,
    /// A plain count.
    Count,
}

/// Statistic a leaderboard is ranked by.
///
/// The numeric index matches the choices offered by the leaderboard chat command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// Sum of adjusted scores (star points divided by its number of contributors).
    #[default]
    Score,
    /// Total seconds spent in runs.
    Time,
    /// Number of runs.
    Runs,
    /// Adjusted score per minute of play.
    ScorePerMinute,
    /// Adjusted score per run.
    ScorePerRun,
    /// Seconds per run.
    TimePerRun,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Score,
        Metric::Time,
        Metric::Runs,
        Metric::ScorePerMinute,
        Metric::ScorePerRun,
        Metric::TimePerRun,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        match self {
            Metric::Score => 0,
            Metric::Time => 1,
            Metric::Runs => 2,
            Metric::ScorePerMinute => 3,
            Metric::ScorePerRun => 4,
            Metric::TimePerRun => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Metric::Score => "score",
            Metric::Time => "time",
            Metric::Runs => "runs",
            Metric::ScorePerMinute => "score/time",
            Metric::ScorePerRun => "score/run",
            Metric::TimePerRun => "time/run",
        }
    }

    pub fn kind(self) -> MetricKind {
        match self {
            Metric::Score | Metric::ScorePerMinute | Metric::ScorePerRun => MetricKind::Score,
            Metric::Time | Metric::TimePerRun => MetricKind::Duration,
            Metric::Runs => MetricKind::Count,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Running totals of one player over the stars of a season.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerTotals {
    pub adjusted_score: f64,
    pub seconds: i64,
    pub runs: i64,
}

impl PlayerTotals {
    /// Adds one closed star to the totals.
    ///
    /// A star without points or without contributors adds no score but still counts as a run.
    pub fn add_star(&mut self, star: &StarModel) {
        self.adjusted_score += adjusted_score(star);
        if let Some(ended_at) = star.ended_at {
            self.seconds += (ended_at - star.started_at).num_seconds().max(0);
        }
        self.runs += 1;
    }

    pub fn value(&self, metric: Metric) -> f64 {
        let seconds = self.seconds as f64;
        let runs = self.runs as f64;

        match metric {
            Metric::Score => self.adjusted_score,
            Metric::Time => seconds,
            Metric::Runs => runs,
            Metric::ScorePerMinute => ratio(self.adjusted_score, seconds) * 60.0,
            Metric::ScorePerRun => ratio(self.adjusted_score, runs),
            Metric::TimePerRun => ratio(seconds, runs),
        }
    }
}

/// A star's points split evenly between its contributors.
pub fn adjusted_score(star: &StarModel) -> f64 {
    match (star.points, star.player_count) {
        (Some(points), Some(count)) if count > 0 => points as f64 / count as f64,
        _ => 0.0,
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// One ranked line of a leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub player_id: String,
    pub name: String,
    pub value: f64,
}

/// Everything the rendering layer needs to draw a season leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboard {
    pub season: i64,
    pub metric: Metric,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    /// Rows ordered by descending value, ties by ascending player ID.
    pub rows: Vec<ReportRow>,
    /// Sum of raw star points over the season, `None` when no star was closed in it.
    pub total_score: Option<i64>,
}
