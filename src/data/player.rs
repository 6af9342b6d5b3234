use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::{db::PlayerModel, event::PlayerEntry};

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts players, refreshing the name of any player that already exists.
    ///
    /// Entries must have unique IDs; use [`dedupe_players`](crate::model::event::dedupe_players)
    /// on raw event rosters first.
    pub async fn upsert_many(&self, players: &[PlayerEntry]) -> Result<Vec<PlayerModel>, DbErr> {
        if players.is_empty() {
            return Ok(Vec::new());
        }

        let players = players.iter().map(|player| entity::player::ActiveModel {
            id: ActiveValue::Set(player.player_id.clone()),
            name: ActiveValue::Set(player.name.clone()),
        });

        entity::prelude::Player::insert_many(players)
            .on_conflict(
                OnConflict::column(entity::player::Column::Id)
                    .update_column(entity::player::Column::Name)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
