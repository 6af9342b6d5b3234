//! White star database fixtures.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CorporationModel, WhiteStarModel, WsParticipationModel},
    TestContext,
};

impl TestContext {
    pub fn white_star<'a>(&'a self) -> WhiteStarFixtures<'a> {
        WhiteStarFixtures { setup: self }
    }
}

pub struct WhiteStarFixtures<'a> {
    pub setup: &'a TestContext,
}

impl<'a> WhiteStarFixtures<'a> {
    /// Insert a mock corporation, or return the existing row if the ID is already present.
    pub async fn insert_mock_corporation(
        &self,
        corporation_id: &str,
    ) -> Result<CorporationModel, TestError> {
        if let Some(existing) = entity::prelude::Corporation::find_by_id(corporation_id.to_string())
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(
            entity::prelude::Corporation::insert(entity::corporation::ActiveModel {
                id: ActiveValue::Set(corporation_id.to_string()),
                name: ActiveValue::Set(format!("Corporation {}", corporation_id)),
                symbol: ActiveValue::Set(1),
                border: ActiveValue::Set(2),
                color_1: ActiveValue::Set(3),
                color_2: ActiveValue::Set(4),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a white star with ranked rosters for both sides.
    ///
    /// Corporations `"{id}-us"` and `"{id}-them"` and any missing players are created. Ally
    /// rank indices start at `1 + slot * 20` and opponents continue the same counter.
    pub async fn insert_mock_white_star(
        &self,
        white_star_id: &str,
        slot: i32,
        started_at: DateTime<Utc>,
        allies: &[&str],
        opponents: &[&str],
    ) -> Result<(WhiteStarModel, Vec<WsParticipationModel>), TestError> {
        let ours = self
            .insert_mock_corporation(&format!("{}-us", white_star_id))
            .await?;
        let theirs = self
            .insert_mock_corporation(&format!("{}-them", white_star_id))
            .await?;

        let white_star = entity::prelude::WhiteStar::insert(entity::white_star::ActiveModel {
            id: ActiveValue::Set(white_star_id.to_string()),
            started_at: ActiveValue::Set(started_at.naive_utc()),
            our_corporation_id: ActiveValue::Set(ours.id),
            opponent_corporation_id: ActiveValue::Set(theirs.id),
            slot: ActiveValue::Set(slot),
            underdog: ActiveValue::Set(false),
            xp_gained: ActiveValue::Set(None),
            our_score: ActiveValue::Set(None),
            opponent_score: ActiveValue::Set(None),
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        let roster = allies
            .iter()
            .map(|id| (*id, false))
            .chain(opponents.iter().map(|id| (*id, true)));

        let mut rank_index = 1 + slot * 20;
        let mut participations = Vec::with_capacity(allies.len() + opponents.len());
        for (player_id, opponent) in roster {
            self.setup.red_star().insert_mock_player(player_id).await?;

            let participation =
                entity::prelude::WsParticipation::insert(entity::ws_participation::ActiveModel {
                    player_id: ActiveValue::Set(player_id.to_string()),
                    white_star_id: ActiveValue::Set(white_star_id.to_string()),
                    opponent: ActiveValue::Set(opponent),
                    rank_index: ActiveValue::Set(rank_index),
                    ..Default::default()
                })
                .exec_with_returning(&self.setup.db)
                .await?;

            participations.push(participation);
            rank_index += 1;
        }

        Ok((white_star, participations))
    }
}
