//! Tests for EventService.

mod red_star;
mod white_star;

use sea_orm::{EntityTrait, PaginatorTrait};
use starlog::{
    config::StartedEventPolicy,
    error::{event::EventError, Error},
    model::event::EventKind,
    service::event::{ApplyOutcome, ApplyReport, EventService},
};
use starlog_test_utils::prelude::*;

async fn count_rows<E>(test: &TestContext, _entity: E) -> Result<u64, TestError>
where
    E: EntityTrait,
    E::Model: Sync,
{
    Ok(E::find().count(&test.db).await?)
}
