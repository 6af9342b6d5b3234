use super::*;

/// Tests clearing when the same ship was recorded twice.
///
/// Expected: true, exactly one of the two pending rows remains
#[tokio::test]
async fn removes_only_one_pending_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_white_star_tables().build().await?;
    test.white_star()
        .insert_mock_white_star("ws1", 0, at(0), &["a1"], &[])
        .await?;
    let tracker_service = TrackerService::new(&test.db);
    let now = at(3 * 86400);

    tracker_service
        .record_elimination(1, Duration::days(2), ShipType::Battleship, now)
        .await
        .expect("first recorded");
    tracker_service
        .record_elimination(1, Duration::days(2), ShipType::Battleship, now)
        .await
        .expect("second recorded");

    let removed = tracker_service
        .clear_elimination(1, ShipType::Battleship, now)
        .await
        .expect("clear succeeds");

    assert!(removed);
    let info = tracker_service.active_info(now).await.expect("info");
    assert_eq!(info[0].us.down.len(), 1);

    Ok(())
}

/// Tests clearing a ship type that is not down.
///
/// Expected: false, the other ship's elimination is kept
#[tokio::test]
async fn returns_false_without_pending_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_white_star_tables().build().await?;
    test.white_star()
        .insert_mock_white_star("ws1", 0, at(0), &["a1"], &[])
        .await?;
    let tracker_service = TrackerService::new(&test.db);
    let now = at(3 * 86400);
    tracker_service
        .record_elimination(1, Duration::days(2), ShipType::Battleship, now)
        .await
        .expect("recorded");

    let removed = tracker_service
        .clear_elimination(1, ShipType::Miner, now)
        .await
        .expect("clear succeeds");

    assert!(!removed);
    let info = tracker_service.active_info(now).await.expect("info");
    assert_eq!(info[0].us.down.len(), 1);

    Ok(())
}

/// Tests clearing after the ship already respawned.
///
/// Expected: false, the expired row is not touched
#[tokio::test]
async fn ignores_respawned_ships() -> Result<(), TestError> {
    let test = TestBuilder::new().with_white_star_tables().build().await?;
    test.white_star()
        .insert_mock_white_star("ws1", 0, at(0), &["a1"], &[])
        .await?;
    let tracker_service = TrackerService::new(&test.db);
    tracker_service
        .record_elimination(1, Duration::days(4), ShipType::Miner, at(86400))
        .await
        .expect("recorded");

    let removed = tracker_service
        .clear_elimination(1, ShipType::Miner, at(2 * 86400))
        .await
        .expect("clear succeeds");

    assert!(!removed);
    assert_eq!(
        entity::prelude::WsRespawn::find().all(&test.db).await?.len(),
        1
    );

    Ok(())
}
