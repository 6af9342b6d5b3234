//! Red star database fixtures.
//!
//! Inserts rows directly through the entity crate so repository tests do not depend on the
//! code under test for their setup.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{ParticipationModel, PlayerModel, StarModel},
    TestContext,
};

impl TestContext {
    pub fn red_star<'a>(&'a self) -> RedStarFixtures<'a> {
        RedStarFixtures { setup: self }
    }
}

pub struct RedStarFixtures<'a> {
    pub setup: &'a TestContext,
}

impl<'a> RedStarFixtures<'a> {
    /// Insert a mock player, or return the existing row if the ID is already present.
    ///
    /// The player name is derived from the ID (`"Player {id}"`).
    pub async fn insert_mock_player(&self, player_id: &str) -> Result<PlayerModel, TestError> {
        if let Some(existing) = entity::prelude::Player::find_by_id(player_id.to_string())
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        Ok(
            entity::prelude::Player::insert(entity::player::ActiveModel {
                id: ActiveValue::Set(player_id.to_string()),
                name: ActiveValue::Set(format!("Player {}", player_id)),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an open star (no end time, points, or player count).
    pub async fn insert_mock_star(
        &self,
        star_id: &str,
        started_at: DateTime<Utc>,
    ) -> Result<StarModel, TestError> {
        Ok(
            entity::prelude::Star::insert(entity::star::ActiveModel {
                id: ActiveValue::Set(star_id.to_string()),
                level: ActiveValue::Set(10),
                dark: ActiveValue::Set(false),
                started_at: ActiveValue::Set(started_at.naive_utc()),
                ended_at: ActiveValue::Set(None),
                points: ActiveValue::Set(None),
                player_count: ActiveValue::Set(None),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a closed star together with its contributors and participation rows.
    ///
    /// Missing players are created. The star's player count is the number of contributors.
    pub async fn insert_mock_ended_star(
        &self,
        star_id: &str,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
        points: i64,
        player_ids: &[&str],
    ) -> Result<(StarModel, Vec<ParticipationModel>), TestError> {
        let star = entity::prelude::Star::insert(entity::star::ActiveModel {
            id: ActiveValue::Set(star_id.to_string()),
            level: ActiveValue::Set(10),
            dark: ActiveValue::Set(false),
            started_at: ActiveValue::Set(started_at.naive_utc()),
            ended_at: ActiveValue::Set(Some(ended_at.naive_utc())),
            points: ActiveValue::Set(Some(points)),
            player_count: ActiveValue::Set(Some(player_ids.len() as i32)),
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        let mut participations = Vec::with_capacity(player_ids.len());
        for player_id in player_ids {
            self.insert_mock_player(player_id).await?;

            let participation =
                entity::prelude::Participation::insert(entity::participation::ActiveModel {
                    player_id: ActiveValue::Set(player_id.to_string()),
                    star_id: ActiveValue::Set(star_id.to_string()),
                    ..Default::default()
                })
                .exec_with_returning(&self.setup.db)
                .await?;

            participations.push(participation);
        }

        Ok((star, participations))
    }
}
