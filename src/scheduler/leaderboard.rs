use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio::sync::mpsc;

use crate::{
    error::Error,
    model::report::{Leaderboard, Metric},
    service::report::ReportService,
};

/// Builds the current season's leaderboard and sends it to the report consumer.
///
/// # Returns
/// - `Ok(1)` - A leaderboard was sent
/// - `Ok(0)` - Outside the active window or nobody has played yet
/// - `Err(Error::InternalError(_))` - The report consumer has shut down
pub async fn refresh_leaderboard(
    db: DatabaseConnection,
    leaderboards: mpsc::Sender<Leaderboard>,
    metric: Metric,
) -> Result<usize, Error> {
    let Some(leaderboard) = ReportService::new(&db)
        .refresh_if_active(Utc::now(), metric)
        .await?
    else {
        return Ok(0);
    };

    leaderboards
        .send(leaderboard)
        .await
        .map_err(|_| Error::InternalError("Leaderboard consumer is closed".to_string()))?;

    Ok(1)
}
