use serde_json::json;

use super::*;

/// Tests a full red star run.
///
/// Verifies that a "started" then "ended" pair leaves one closed star with the event's points,
/// its contributor count, and one participation row per contributor.
///
/// Expected: statuses 1 then 2, closed star, 3 participation rows
#[tokio::test]
async fn started_then_ended_closes_star() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let event_service = EventService::new(&test.db);

    let started = event_service
        .apply(&payload::red_star_started("s1", 10, at(0)))
        .await;
    let ended = event_service
        .apply(&payload::red_star_ended("s1", at(900), 300, &["p1", "p2", "p3"]))
        .await;

    assert_eq!(ApplyReport::from(started).status, 1);
    assert_eq!(ApplyReport::from(ended).status, 2);

    let star = entity::prelude::Star::find_by_id("s1".to_string())
        .one(&test.db)
        .await?
        .expect("star exists");
    assert_eq!(star.started_at, at(0).naive_utc());
    assert_eq!(star.ended_at, Some(at(900).naive_utc()));
    assert_eq!(star.points, Some(300));
    assert_eq!(star.player_count, Some(3));
    assert_eq!(count_rows(&test, entity::prelude::Participation).await?, 3);
    assert_eq!(count_rows(&test, entity::prelude::Player).await?, 3);

    Ok(())
}

/// Tests re-delivery of an "ended" event.
///
/// The star update and player upsert are idempotent, but participation rows are appended again.
///
/// Expected: Ok both times, star unchanged, participation rows doubled
#[tokio::test]
async fn redelivered_ended_duplicates_participation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let event_service = EventService::new(&test.db);
    let ended = payload::red_star_ended("s1", at(900), 300, &["p1", "p2"]);

    event_service
        .apply(&payload::red_star_started("s1", 10, at(0)))
        .await
        .expect("started applies");
    event_service.apply(&ended).await.expect("first end applies");
    event_service.apply(&ended).await.expect("second end applies");

    let star = entity::prelude::Star::find_by_id("s1".to_string())
        .one(&test.db)
        .await?
        .expect("star exists");
    assert_eq!(star.points, Some(300));
    assert_eq!(star.player_count, Some(2));
    assert_eq!(count_rows(&test, entity::prelude::Player).await?, 2);
    assert_eq!(count_rows(&test, entity::prelude::Participation).await?, 4);

    Ok(())
}

/// Tests a contributor listed twice in one payload.
///
/// Expected: one player row with the last name, player count and participation counted once
#[tokio::test]
async fn repeated_contributor_is_counted_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let event_service = EventService::new(&test.db);
    let mut ended = payload::red_star_ended("s1", at(900), 300, &["p1", "p2"]);
    ended["PlayersWhoContributed"] = json!([
        { "PlayerID": "p1", "PlayerName": "Old" },
        { "PlayerID": "p2", "PlayerName": "Two" },
        { "PlayerID": "p1", "PlayerName": "New" },
    ]);

    event_service
        .apply(&payload::red_star_started("s1", 10, at(0)))
        .await
        .expect("started applies");
    event_service.apply(&ended).await.expect("ended applies");

    let star = entity::prelude::Star::find_by_id("s1".to_string())
        .one(&test.db)
        .await?
        .expect("star exists");
    let player = entity::prelude::Player::find_by_id("p1".to_string())
        .one(&test.db)
        .await?
        .expect("player exists");
    assert_eq!(star.player_count, Some(2));
    assert_eq!(player.name, "New");
    assert_eq!(count_rows(&test, entity::prelude::Participation).await?, 2);

    Ok(())
}

/// Tests an "ended" event for a star that never started.
///
/// Expected: Ok, contributors upserted, no star and no participation rows
#[tokio::test]
async fn ended_for_unknown_star_skips_participation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let event_service = EventService::new(&test.db);

    let outcome = event_service
        .apply(&payload::red_star_ended("missing", at(900), 300, &["p1"]))
        .await;

    assert!(
        matches!(outcome, Ok(ApplyOutcome::Applied(EventKind::StarEnded))),
        "Unexpected outcome: {:?}",
        outcome
    );
    assert_eq!(count_rows(&test, entity::prelude::Star).await?, 0);
    assert_eq!(count_rows(&test, entity::prelude::Player).await?, 1);
    assert_eq!(count_rows(&test, entity::prelude::Participation).await?, 0);

    Ok(())
}

/// Tests a failing "ended" event leaves no partial writes.
///
/// Without a participation table the last write of the transaction fails after the star was
/// closed and the contributors were upserted.
///
/// Expected: status 0, star still open, no players
#[tokio::test]
async fn failed_end_rolls_back() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .with_table(entity::prelude::Star)
        .build()
        .await?;
    let event_service = EventService::new(&test.db);
    event_service
        .apply(&payload::red_star_started("s1", 10, at(0)))
        .await
        .expect("start applies");

    let ended = event_service
        .apply(&payload::red_star_ended("s1", at(900), 300, &["p1", "p2"]))
        .await;

    assert_eq!(ApplyReport::from(ended).status, 0);
    let star = entity::prelude::Star::find_by_id("s1".to_string())
        .one(&test.db)
        .await?
        .expect("star exists");
    assert_eq!(star.ended_at, None);
    assert_eq!(star.points, None);
    assert_eq!(count_rows(&test, entity::prelude::Player).await?, 0);

    Ok(())
}

/// Tests re-delivery of a "started" event under the default strict policy.
///
/// Expected: Err with DbErr, status 0, original star untouched
#[tokio::test]
async fn strict_policy_rejects_duplicate_started() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let event_service = EventService::new(&test.db);

    event_service
        .apply(&payload::red_star_started("s1", 10, at(0)))
        .await
        .expect("first start applies");
    let result = event_service
        .apply(&payload::red_star_started("s1", 12, at(60)))
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))), "Unexpected: {:?}", result);
    assert_eq!(ApplyReport::from(result).status, 0);
    let star = entity::prelude::Star::find_by_id("s1".to_string())
        .one(&test.db)
        .await?
        .expect("star exists");
    assert_eq!(star.level, 10);

    Ok(())
}

/// Tests re-delivery of a "started" event under the deduplicating policy.
///
/// Expected: Ok with status 1, original star untouched
#[tokio::test]
async fn deduplicate_policy_skips_duplicate_started() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let event_service =
        EventService::new(&test.db).with_started_event_policy(StartedEventPolicy::Deduplicate);

    event_service
        .apply(&payload::red_star_started("s1", 10, at(0)))
        .await
        .expect("first start applies");
    let report = ApplyReport::from(
        event_service
            .apply(&payload::red_star_started("s1", 12, at(60)))
            .await,
    );

    assert_eq!(report.status, 1);
    assert!(report.error.is_none());
    let star = entity::prelude::Star::find_by_id("s1".to_string())
        .one(&test.db)
        .await?
        .expect("star exists");
    assert_eq!(star.level, 10);
    assert_eq!(star.started_at, at(0).naive_utc());

    Ok(())
}

/// Tests an event type outside the handled set.
///
/// Expected: Ok with Unrecognized, sentinel status -1, no rows written
#[tokio::test]
async fn unrecognized_event_writes_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let event_service = EventService::new(&test.db);
    let mut unknown = payload::red_star_ended("s1", at(900), 300, &["p1"]);
    unknown["EventType"] = json!("BlueStarEnded");

    let result = event_service.apply(&unknown).await;

    assert!(
        matches!(&result, Ok(ApplyOutcome::Unrecognized(event_type)) if event_type == "BlueStarEnded"),
        "Unexpected: {:?}",
        result
    );
    let report = ApplyReport::from(result);
    assert_eq!(report.status, -1);
    assert!(report.error.is_none());
    assert_eq!(count_rows(&test, entity::prelude::Player).await?, 0);
    assert_eq!(count_rows(&test, entity::prelude::Star).await?, 0);

    Ok(())
}

/// Tests a known event type missing one of its required fields.
///
/// Expected: Err with EventError::Malformed, status 0, no rows written
#[tokio::test]
async fn malformed_known_event_writes_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let event_service = EventService::new(&test.db);
    let mut malformed = payload::red_star_ended("s1", at(900), 300, &["p1"]);
    malformed["RSEventPoints"] = json!("lots");

    let result = event_service.apply(&malformed).await;

    assert!(
        matches!(result, Err(Error::EventError(EventError::Malformed { .. }))),
        "Unexpected: {:?}",
        result
    );
    assert_eq!(ApplyReport::from(result).status, 0);
    assert_eq!(count_rows(&test, entity::prelude::Player).await?, 0);

    Ok(())
}

/// Tests raw JSON that does not decode.
///
/// Expected: Err with JsonError
#[tokio::test]
async fn undecodable_json_is_an_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let event_service = EventService::new(&test.db);

    let result = event_service.apply_json("{ not json").await;

    assert!(matches!(result, Err(Error::JsonError(_))), "Unexpected: {:?}", result);

    Ok(())
}

/// Tests that only a closed red star asks for a leaderboard refresh.
#[tokio::test]
async fn only_star_ended_refreshes_leaderboard() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let event_service = EventService::new(&test.db);

    let started = ApplyReport::from(
        event_service
            .apply(&payload::red_star_started("s1", 10, at(0)))
            .await,
    );
    let ended = ApplyReport::from(
        event_service
            .apply(&payload::red_star_ended("s1", at(900), 300, &["p1"]))
            .await,
    );

    assert!(!started.refreshes_leaderboard());
    assert!(ended.refreshes_leaderboard());

    Ok(())
}
