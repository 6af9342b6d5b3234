use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    db::{PlayerModel, WsParticipationModel},
    event::PlayerEntry,
};

/// Rank indices reserved per slot; slot `n` starts at `1 + n * RANKS_PER_SLOT`.
pub const RANKS_PER_SLOT: i32 = 20;

pub struct WsParticipationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WsParticipationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the ranked roster of a white star.
    ///
    /// Allies are numbered from the first rank index of the slot and opponents continue the
    /// same counter, so every participant of a slot has a distinct index.
    pub async fn create_roster(
        &self,
        white_star_id: &str,
        slot: i32,
        allies: &[PlayerEntry],
        opponents: &[PlayerEntry],
    ) -> Result<Vec<WsParticipationModel>, DbErr> {
        if allies.is_empty() && opponents.is_empty() {
            return Ok(Vec::new());
        }

        let first_rank = 1 + slot * RANKS_PER_SLOT;
        let roster = allies
            .iter()
            .map(|player| (player, false))
            .chain(opponents.iter().map(|player| (player, true)))
            .zip(first_rank..)
            .map(
                |((player, opponent), rank_index)| entity::ws_participation::ActiveModel {
                    player_id: ActiveValue::Set(player.player_id.clone()),
                    white_star_id: ActiveValue::Set(white_star_id.to_string()),
                    opponent: ActiveValue::Set(opponent),
                    rank_index: ActiveValue::Set(rank_index),
                    ..Default::default()
                },
            );

        entity::prelude::WsParticipation::insert_many(roster)
            .exec_with_returning(self.db)
            .await
    }

    /// Roster entries with the given rank index among the given white stars.
    pub async fn find_by_rank_index(
        &self,
        white_star_ids: &[String],
        rank_index: i32,
    ) -> Result<Vec<WsParticipationModel>, DbErr> {
        entity::prelude::WsParticipation::find()
            .filter(
                entity::ws_participation::Column::WhiteStarId.is_in(white_star_ids.iter().cloned()),
            )
            .filter(entity::ws_participation::Column::RankIndex.eq(rank_index))
            .all(self.db)
            .await
    }

    /// Full rosters of the given white stars joined with their players, ordered by rank index.
    pub async fn get_rosters(
        &self,
        white_star_ids: &[String],
    ) -> Result<Vec<(WsParticipationModel, Option<PlayerModel>)>, DbErr> {
        entity::prelude::WsParticipation::find()
            .find_also_related(entity::prelude::Player)
            .filter(
                entity::ws_participation::Column::WhiteStarId.is_in(white_star_ids.iter().cloned()),
            )
            .order_by_asc(entity::ws_participation::Column::RankIndex)
            .all(self.db)
            .await
    }
}
