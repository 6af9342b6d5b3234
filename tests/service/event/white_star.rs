use super::*;

/// Tests a white star start in slot 1.
///
/// Verifies both corporations, the white star, every participant, and the ranked roster are
/// written, with allies numbered from 21 and opponents continuing the counter.
///
/// Expected: status 3, ranks 21..=25
#[tokio::test]
async fn started_writes_ranked_roster() -> Result<(), TestError> {
    let test = TestBuilder::new().with_white_star_tables().build().await?;
    let event_service = EventService::new(&test.db);

    let report = ApplyReport::from(
        event_service
            .apply(&payload::white_star_started(
                "ws1",
                1,
                at(0),
                &["a1", "a2", "a3"],
                &["o1", "o2"],
            ))
            .await,
    );

    assert_eq!(report.status, 3, "Error: {:?}", report.error);
    let white_star = entity::prelude::WhiteStar::find_by_id("ws1".to_string())
        .one(&test.db)
        .await?
        .expect("white star exists");
    assert_eq!(white_star.slot, 1);
    assert_eq!(white_star.our_corporation_id, "ws1-us");
    assert_eq!(white_star.opponent_corporation_id, "ws1-them");
    assert_eq!(count_rows(&test, entity::prelude::Corporation).await?, 2);
    assert_eq!(count_rows(&test, entity::prelude::Player).await?, 5);

    let mut roster = entity::prelude::WsParticipation::find().all(&test.db).await?;
    roster.sort_by_key(|p| p.rank_index);
    let ranks: Vec<(&str, bool, i32)> = roster
        .iter()
        .map(|p| (p.player_id.as_str(), p.opponent, p.rank_index))
        .collect();
    assert_eq!(
        ranks,
        vec![
            ("a1", false, 21),
            ("a2", false, 22),
            ("a3", false, 23),
            ("o1", true, 24),
            ("o2", true, 25),
        ]
    );

    Ok(())
}

/// Tests a failing white star start leaves no partial writes.
///
/// The second start reuses the white star ID, so the insert fails after the corporations of
/// the new payload were upserted inside the same transaction.
///
/// Expected: Err, no new corporations, players, or roster rows
#[tokio::test]
async fn failed_start_rolls_back() -> Result<(), TestError> {
    let test = TestBuilder::new().with_white_star_tables().build().await?;
    let event_service = EventService::new(&test.db);
    event_service
        .apply(&payload::white_star_started("ws1", 0, at(0), &["a1"], &["o1"]))
        .await
        .expect("first start applies");

    let mut duplicate = payload::white_star_started("ws1", 0, at(60), &["a9"], &["o9"]);
    duplicate["Corporation"] = payload::corporation("other-us");

    let result = event_service.apply(&duplicate).await;

    assert!(result.is_err());
    assert_eq!(count_rows(&test, entity::prelude::Corporation).await?, 2);
    assert_eq!(count_rows(&test, entity::prelude::Player).await?, 2);
    assert_eq!(count_rows(&test, entity::prelude::WsParticipation).await?, 2);

    Ok(())
}

/// Tests a slot outside {0, 1}.
///
/// Expected: Err with EventError::InvalidSlot, nothing written
#[tokio::test]
async fn invalid_slot_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new().with_white_star_tables().build().await?;
    let event_service = EventService::new(&test.db);

    let result = event_service
        .apply(&payload::white_star_started("ws1", 3, at(0), &["a1"], &[]))
        .await;

    assert!(
        matches!(result, Err(Error::EventError(EventError::InvalidSlot(3)))),
        "Unexpected: {:?}",
        result
    );
    assert_eq!(count_rows(&test, entity::prelude::WhiteStar).await?, 0);

    Ok(())
}

/// Tests the end of a white star.
///
/// Expected: status 4 and final scores stored
#[tokio::test]
async fn ended_stores_scores() -> Result<(), TestError> {
    let test = TestBuilder::new().with_white_star_tables().build().await?;
    let event_service = EventService::new(&test.db);
    event_service
        .apply(&payload::white_star_started("ws1", 0, at(0), &["a1"], &["o1"]))
        .await
        .expect("start applies");

    let report = ApplyReport::from(
        event_service
            .apply(&payload::white_star_ended("ws1", at(86400), 150, 60, 45))
            .await,
    );

    assert_eq!(report.status, 4);
    let white_star = entity::prelude::WhiteStar::find_by_id("ws1".to_string())
        .one(&test.db)
        .await?
        .expect("white star exists");
    assert_eq!(white_star.xp_gained, Some(150));
    assert_eq!(white_star.our_score, Some(60));
    assert_eq!(white_star.opponent_score, Some(45));

    Ok(())
}

/// Tests the end of an unknown white star.
///
/// Expected: Ok with status 4, nothing written
#[tokio::test]
async fn ended_for_unknown_white_star_is_not_an_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_white_star_tables().build().await?;
    let event_service = EventService::new(&test.db);

    let report = ApplyReport::from(
        event_service
            .apply(&payload::white_star_ended("missing", at(86400), 150, 60, 45))
            .await,
    );

    assert_eq!(report.status, 4);
    assert!(report.error.is_none());
    assert_eq!(count_rows(&test, entity::prelude::WhiteStar).await?, 0);

    Ok(())
}
