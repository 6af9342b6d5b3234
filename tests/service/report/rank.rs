use starlog::service::event::EventService;

use super::*;

/// Tests adjusted score over two stars.
///
/// A 300 point star shared by three players and a 100 point solo star give the solo player
/// 300 / 3 + 100 / 1 = 200.
///
/// Expected: p1 = 200, p2 = p3 = 100, ties ordered by player ID
#[tokio::test]
async fn ranks_by_adjusted_score() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let fixtures = test.red_star();
    fixtures
        .insert_mock_ended_star("s1", at(0), at(600), 300, &["p3", "p1", "p2"])
        .await?;
    fixtures
        .insert_mock_ended_star("s2", at(1200), at(1500), 100, &["p1"])
        .await?;

    let rows = ReportService::new(&test.db)
        .rank(SEASON, Metric::Score)
        .await
        .expect("rank succeeds")
        .expect("season has data");

    assert_eq!(values(&rows), vec![("p1", 200.0), ("p2", 100.0), ("p3", 100.0)]);
    assert_eq!(rows[0].name, "Player p1");

    Ok(())
}

/// Tests the time, run, and ratio metrics.
///
/// p1 played 600s and 300s for 200 adjusted points, p2 played 600s for 100.
#[tokio::test]
async fn ranks_by_derived_metrics() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let fixtures = test.red_star();
    fixtures
        .insert_mock_ended_star("s1", at(0), at(600), 200, &["p1", "p2"])
        .await?;
    fixtures
        .insert_mock_ended_star("s2", at(1200), at(1500), 100, &["p1"])
        .await?;
    let report_service = ReportService::new(&test.db);

    let time = report_service.rank(SEASON, Metric::Time).await.expect("rank");
    let runs = report_service.rank(SEASON, Metric::Runs).await.expect("rank");
    let per_minute = report_service
        .rank(SEASON, Metric::ScorePerMinute)
        .await
        .expect("rank");
    let per_run = report_service
        .rank(SEASON, Metric::ScorePerRun)
        .await
        .expect("rank");
    let time_per_run = report_service
        .rank(SEASON, Metric::TimePerRun)
        .await
        .expect("rank");

    assert_eq!(values(&time.expect("data")), vec![("p1", 900.0), ("p2", 600.0)]);
    assert_eq!(values(&runs.expect("data")), vec![("p1", 2.0), ("p2", 1.0)]);
    assert_eq!(
        values(&per_minute.expect("data")),
        vec![("p1", 200.0 / 900.0 * 60.0), ("p2", 100.0 / 600.0 * 60.0)]
    );
    assert_eq!(
        values(&per_run.expect("data")),
        vec![("p1", 100.0), ("p2", 100.0)]
    );
    assert_eq!(
        values(&time_per_run.expect("data")),
        vec![("p2", 600.0), ("p1", 450.0)]
    );

    Ok(())
}

/// Tests that duplicate participation rows from a re-delivered "ended" event count once.
#[tokio::test]
async fn counts_each_star_once_per_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let event_service = EventService::new(&test.db);
    let ended = payload::red_star_ended("s1", at(600), 300, &["p1", "p2", "p3"]);
    event_service
        .apply(&payload::red_star_started("s1", 10, at(0)))
        .await
        .expect("started applies");
    event_service.apply(&ended).await.expect("ended applies");
    event_service.apply(&ended).await.expect("ended re-applies");

    let report_service = ReportService::new(&test.db);
    let score = report_service
        .rank(SEASON, Metric::Score)
        .await
        .expect("rank")
        .expect("data");
    let runs = report_service
        .rank(SEASON, Metric::Runs)
        .await
        .expect("rank")
        .expect("data");

    assert_eq!(
        values(&score),
        vec![("p1", 100.0), ("p2", 100.0), ("p3", 100.0)]
    );
    assert!(runs.iter().all(|row| row.value == 1.0));

    Ok(())
}

/// Tests that only closed stars intersecting the season are counted.
#[tokio::test]
async fn ignores_stars_outside_season() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let fixtures = test.red_star();
    fixtures
        .insert_mock_ended_star("inside", at(600), at(1200), 100, &["p1"])
        .await?;
    fixtures
        .insert_mock_ended_star("previous", at(-28 * 86400), at(-28 * 86400 + 600), 500, &["p2"])
        .await?;
    fixtures.insert_mock_star("open", at(1800)).await?;

    let rows = ReportService::new(&test.db)
        .rank(SEASON, Metric::Score)
        .await
        .expect("rank")
        .expect("data");

    assert_eq!(values(&rows), vec![("p1", 100.0)]);

    Ok(())
}

/// Tests a season without any closed star.
///
/// Expected: Ok(None) rather than an empty list or an error
#[tokio::test]
async fn empty_season_has_no_data() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    test.red_star().insert_mock_star("open", at(600)).await?;

    let report_service = ReportService::new(&test.db);

    assert!(report_service
        .rank(SEASON, Metric::Score)
        .await
        .expect("rank")
        .is_none());
    assert_eq!(report_service.total_score(SEASON).await.expect("total"), None);

    Ok(())
}

/// Tests a custom calendar with one-week seasons.
#[tokio::test]
async fn uses_configured_calendar() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    test.red_star()
        .insert_mock_ended_star("s1", at(7 * 86400), at(7 * 86400 + 600), 100, &["p1"])
        .await?;

    let calendar = SeasonCalendar::new(
        at(0),
        1,
        chrono::Duration::days(7),
        chrono::Duration::days(2),
    );
    let report_service = ReportService::new(&test.db).with_calendar(calendar);

    assert!(report_service
        .rank(1, Metric::Score)
        .await
        .expect("rank")
        .is_none());
    assert!(report_service
        .rank(2, Metric::Score)
        .await
        .expect("rank")
        .is_some());

    Ok(())
}

/// Tests season indices whose dates cannot be represented.
///
/// Expected: Ok(None) from every report operation, with data present in the real season
#[tokio::test]
async fn unrepresentable_season_has_no_data() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    test.red_star()
        .insert_mock_ended_star("s1", at(0), at(600), 100, &["p1"])
        .await?;

    let report_service = ReportService::new(&test.db);

    for season in [i64::MAX, i64::MIN, 10_000_000] {
        assert!(report_service
            .rank(season, Metric::Score)
            .await
            .expect("rank")
            .is_none());
        assert_eq!(report_service.total_score(season).await.expect("total"), None);
        assert!(report_service
            .leaderboard(season, Metric::Score)
            .await
            .expect("leaderboard")
            .is_none());
    }

    Ok(())
}
