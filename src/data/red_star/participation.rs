use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::db::{ParticipationModel, PlayerModel};

const BATCH_SIZE: usize = 100;

pub struct ParticipationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends one participation row per player ID.
    ///
    /// Rows are never merged with existing ones for the same star.
    pub async fn create_many(
        &self,
        star_id: &str,
        player_ids: &[String],
    ) -> Result<Vec<ParticipationModel>, DbErr> {
        if player_ids.is_empty() {
            return Ok(Vec::new());
        }

        let participations = player_ids
            .iter()
            .map(|player_id| entity::participation::ActiveModel {
                player_id: ActiveValue::Set(player_id.clone()),
                star_id: ActiveValue::Set(star_id.to_string()),
                ..Default::default()
            });

        entity::prelude::Participation::insert_many(participations)
            .exec_with_returning(self.db)
            .await
    }

    /// Participation rows for the given stars together with their player.
    ///
    /// Queries in batches to keep the `IN` list bounded.
    pub async fn get_with_players_by_star_ids(
        &self,
        star_ids: &[String],
    ) -> Result<Vec<(ParticipationModel, Option<PlayerModel>)>, DbErr> {
        let mut rows = Vec::new();

        for batch in star_ids.chunks(BATCH_SIZE) {
            let batch_rows = entity::prelude::Participation::find()
                .find_also_related(entity::prelude::Player)
                .filter(entity::participation::Column::StarId.is_in(batch.iter().cloned()))
                .order_by_asc(entity::participation::Column::Id)
                .all(self.db)
                .await?;

            rows.extend(batch_rows);
        }

        Ok(rows)
    }
}
