
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use starlog_test_utils::prelude::*;

use super::{participation::ParticipationRepository, star::StarRepository};
use crate::{model::event::StarStarted, util::season::SeasonCalendar};

fn star_started(star_id: &str, offset_seconds: i64) -> StarStarted {
    StarStarted {
        star_id: star_id.to_string(),
        level: 10,
        dark: false,
        timestamp: at(offset_seconds),
    }
}
