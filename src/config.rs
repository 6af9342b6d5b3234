//! Environment configuration.

use std::str::FromStr;

use crate::{error::config::ConfigError, model::report::Metric};

/// Default refresh schedule for the current season's leaderboard (every 15 minutes).
pub static DEFAULT_LEADERBOARD_CRON: &str = "0 */15 * * * *";

/// How a "started" event whose identifier already exists is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartedEventPolicy {
    /// The duplicate insert fails and is reported as a failed apply.
    #[default]
    Strict,
    /// The duplicate is skipped, for transports that deliver at least once.
    Deduplicate,
}

impl FromStr for StartedEventPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "deduplicate" => Ok(Self::Deduplicate),
            other => Err(format!(
                "expected \"strict\" or \"deduplicate\", got \"{}\"",
                other
            )),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub leaderboard_cron: String,
    pub leaderboard_metric: Metric,
    pub started_event_policy: StartedEventPolicy,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; every other variable falls back to its default when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let leaderboard_cron = std::env::var("LEADERBOARD_CRON")
            .unwrap_or_else(|_| DEFAULT_LEADERBOARD_CRON.to_string());

        let leaderboard_metric = match std::env::var("LEADERBOARD_METRIC") {
            Ok(value) => value
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(Metric::from_index)
                .ok_or_else(|| ConfigError::InvalidEnvValue {
                    var: "LEADERBOARD_METRIC".to_string(),
                    reason: format!("expected a metric index from 0 to 5, got \"{}\"", value),
                })?,
            Err(_) => Metric::default(),
        };

        let started_event_policy = match std::env::var("STARTED_EVENT_POLICY") {
            Ok(value) => value
                .parse()
                .map_err(|reason| ConfigError::InvalidEnvValue {
                    var: "STARTED_EVENT_POLICY".to_string(),
                    reason,
                })?,
            Err(_) => StartedEventPolicy::default(),
        };

        Ok(Self {
            database_url,
            leaderboard_cron,
            leaderboard_metric,
            started_event_policy,
        })
    }
}
