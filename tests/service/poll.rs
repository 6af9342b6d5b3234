//! Tests for PollService.

use starlog::{model::poll::MonitoredPoll, service::poll::PollService};
use starlog_test_utils::prelude::*;

fn poll(channel_id: &str, message_id: &str) -> MonitoredPoll {
    MonitoredPoll {
        channel_id: channel_id.to_string(),
        message_id: message_id.to_string(),
    }
}

/// Expect no poll before one was set
#[tokio::test]
async fn nothing_monitored_initially() -> Result<(), TestError> {
    let test = TestBuilder::new().with_var_table().build().await?;

    let current = PollService::new(&test.db).get().await.expect("get");

    assert_eq!(current, None);

    Ok(())
}

/// Expect the pointer to round trip and a second set to replace the first
#[tokio::test]
async fn set_replaces_pointer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_var_table().build().await?;
    let poll_service = PollService::new(&test.db);

    poll_service.set(&poll("c1", "m1")).await.expect("set");
    assert_eq!(poll_service.get().await.expect("get"), Some(poll("c1", "m1")));

    poll_service.set(&poll("c2", "m2")).await.expect("set");
    assert_eq!(poll_service.get().await.expect("get"), Some(poll("c2", "m2")));

    Ok(())
}

/// Expect clear to stop monitoring
#[tokio::test]
async fn clear_removes_pointer() -> Result<(), TestError> {
    let test = TestBuilder::new().with_var_table().build().await?;
    let poll_service = PollService::new(&test.db);
    poll_service.set(&poll("c1", "m1")).await.expect("set");

    poll_service.clear().await.expect("clear");

    assert_eq!(poll_service.get().await.expect("get"), None);

    Ok(())
}
