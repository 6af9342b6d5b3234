//! Tests for Scheduler::schedule_job.

use starlog::{
    error::Error,
    model::report::{Leaderboard, Metric},
    scheduler::{leaderboard::refresh_leaderboard, Scheduler},
};
use starlog_test_utils::prelude::*;
use tokio::sync::mpsc;

/// Tests registering the leaderboard job on a valid cron expression.
///
/// Expected: Ok and the scheduler starts and shuts down cleanly
#[tokio::test]
async fn registers_job_with_valid_cron() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let (leaderboard_tx, _leaderboard_rx) = mpsc::channel::<Leaderboard>(1);

    let mut scheduler = Scheduler::new(test.db.clone(), leaderboard_tx)
        .await
        .expect("scheduler");
    let result = scheduler
        .schedule_job("0 */15 * * * *", "leaderboard", |db, sender| {
            refresh_leaderboard(db, sender, Metric::Score)
        })
        .await;

    assert!(result.is_ok());
    let mut sched = scheduler.start().await.expect("start");
    sched.shutdown().await.expect("shutdown");

    Ok(())
}

/// Tests rejecting a malformed cron expression.
///
/// Expected: Err(Error::SchedulerError)
#[tokio::test]
async fn rejects_invalid_cron() -> Result<(), TestError> {
    let test = TestBuilder::new().with_red_star_tables().build().await?;
    let (leaderboard_tx, _leaderboard_rx) = mpsc::channel::<Leaderboard>(1);

    let mut scheduler = Scheduler::new(test.db.clone(), leaderboard_tx)
        .await
        .expect("scheduler");
    let result = scheduler
        .schedule_job("every fifteen minutes", "leaderboard", |db, sender| {
            refresh_leaderboard(db, sender, Metric::Score)
        })
        .await;

    assert!(matches!(result, Err(Error::SchedulerError(_))));

    Ok(())
}
