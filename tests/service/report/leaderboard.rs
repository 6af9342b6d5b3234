use chrono::Duration;

use super::*;

/// Tests the full leaderboard of a season.
///
/// Expected: rows, raw total score, and the season's timeframe
#[tokio::test]
async fn builds_leaderboard_with_total_score() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let fixtures = test.red_star();
    fixtures
        .insert_mock_ended_star("s1", at(0), at(600), 300, &["p1", "p2", "p3"])
        .await?;
    fixtures
        .insert_mock_ended_star("s2", at(1200), at(1500), 100, &["p1"])
        .await?;

    let leaderboard = ReportService::new(&test.db)
        .leaderboard(SEASON, Metric::Score)
        .await
        .expect("leaderboard")
        .expect("data");

    assert_eq!(leaderboard.season, SEASON);
    assert_eq!(leaderboard.metric, Metric::Score);
    assert_eq!(leaderboard.starts_at, at(0));
    assert_eq!(leaderboard.ends_at, at(2 * 86400));
    assert_eq!(leaderboard.total_score, Some(400));
    assert_eq!(leaderboard.rows.len(), 3);

    Ok(())
}

/// Tests the automatic refresh inside and outside the event window.
///
/// Expected: Some during the two-day window, None afterwards
#[tokio::test]
async fn refreshes_only_during_active_window() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    test.red_star()
        .insert_mock_ended_star("s1", at(0), at(600), 300, &["p1"])
        .await?;
    let report_service = ReportService::new(&test.db);

    let during = report_service
        .refresh_if_active(at(3600), Metric::Score)
        .await
        .expect("refresh");
    let after = report_service
        .refresh_if_active(at(0) + Duration::days(2), Metric::Score)
        .await
        .expect("refresh");

    assert_eq!(during.map(|l| l.season), Some(SEASON));
    assert!(after.is_none());

    Ok(())
}
