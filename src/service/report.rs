//! Season leaderboards.
//!
//! Per-player statistics are folded in memory from the closed stars of a season and their
//! participation rows. A player listed more than once for the same star (re-delivered "ended"
//! events) is counted once.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::red_star::{participation::ParticipationRepository, star::StarRepository},
    error::Error,
    model::report::{Leaderboard, Metric, PlayerTotals, ReportRow},
    util::season::SeasonCalendar,
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
    calendar: SeasonCalendar,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`] using the default season calendar
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            calendar: SeasonCalendar::default(),
        }
    }

    pub fn with_calendar(mut self, calendar: SeasonCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Ranks every player who contributed to a closed star of the season.
    ///
    /// # Returns
    /// - `Ok(Some(rows))` - Rows ordered by descending value, ties by ascending player ID
    /// - `Ok(None)` - No player contributed to a star in the season, or the season lies outside
    ///   the range of representable dates
    /// - `Err(Error::DbErr(_))` - Query failure
    pub async fn rank(&self, season: i64, metric: Metric) -> Result<Option<Vec<ReportRow>>, Error> {
        let Some(timeframe) = self.calendar.timeframe(season) else {
            return Ok(None);
        };

        let stars = StarRepository::new(self.db)
            .get_closed_in_timeframe(&timeframe)
            .await?;
        if stars.is_empty() {
            return Ok(None);
        }

        let star_ids: Vec<String> = stars.iter().map(|star| star.id.clone()).collect();
        let participations = ParticipationRepository::new(self.db)
            .get_with_players_by_star_ids(&star_ids)
            .await?;

        let stars_by_id: HashMap<&str, _> =
            stars.iter().map(|star| (star.id.as_str(), star)).collect();
        let mut counted: HashSet<(String, String)> = HashSet::new();
        let mut totals: HashMap<String, (String, PlayerTotals)> = HashMap::new();

        for (participation, player) in participations {
            let Some(star) = stars_by_id.get(participation.star_id.as_str()) else {
                continue;
            };
            if !counted.insert((participation.player_id.clone(), participation.star_id.clone())) {
                continue;
            }

            let name = player
                .map(|player| player.name)
                .unwrap_or_else(|| participation.player_id.clone());
            totals
                .entry(participation.player_id)
                .or_insert_with(|| (name, PlayerTotals::default()))
                .1
                .add_star(star);
        }

        if totals.is_empty() {
            return Ok(None);
        }

        let mut rows: Vec<ReportRow> = totals
            .into_iter()
            .map(|(player_id, (name, totals))| ReportRow {
                player_id,
                name,
                value: totals.value(metric),
            })
            .collect();
        rows.sort_by(|a, b| {
            b.value
                .total_cmp(&a.value)
                .then_with(|| a.player_id.cmp(&b.player_id))
        });

        tracing::debug!(
            "Ranked {} players over {} stars of season {} by {}",
            rows.len(),
            stars.len(),
            season,
            metric
        );

        Ok(Some(rows))
    }

    /// Sum of raw points over the season's closed stars, `None` when there are none.
    pub async fn total_score(&self, season: i64) -> Result<Option<i64>, Error> {
        let Some(timeframe) = self.calendar.timeframe(season) else {
            return Ok(None);
        };

        Ok(StarRepository::new(self.db)
            .get_points_in_timeframe(&timeframe)
            .await?)
    }

    /// Builds the full leaderboard of a season, `None` when nobody played in it.
    pub async fn leaderboard(
        &self,
        season: i64,
        metric: Metric,
    ) -> Result<Option<Leaderboard>, Error> {
        let Some(timeframe) = self.calendar.timeframe(season) else {
            return Ok(None);
        };
        let Some(rows) = self.rank(season, metric).await? else {
            return Ok(None);
        };
        let total_score = self.total_score(season).await?;

        Ok(Some(Leaderboard {
            season,
            metric,
            starts_at: timeframe.starts_at,
            ends_at: timeframe.ends_at,
            rows,
            total_score,
        }))
    }

    /// Builds the current season's leaderboard while its event is running.
    ///
    /// Returns `None` outside the active window or when nobody has played yet.
    pub async fn refresh_if_active(
        &self,
        now: DateTime<Utc>,
        metric: Metric,
    ) -> Result<Option<Leaderboard>, Error> {
        if !self.calendar.is_within_active_window(now) {
            return Ok(None);
        }

        self.leaderboard(self.calendar.current_season_index(now), metric)
            .await
    }
}
