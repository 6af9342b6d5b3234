use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::{db::WsRespawnModel, white_star::ShipType};

pub struct WsRespawnRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WsRespawnRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        white_star_id: &str,
        player_id: &str,
        ship_type: ShipType,
        respawns_at: DateTime<Utc>,
    ) -> Result<WsRespawnModel, DbErr> {
        let respawn = entity::ws_respawn::ActiveModel {
            player_id: ActiveValue::Set(player_id.to_string()),
            white_star_id: ActiveValue::Set(white_star_id.to_string()),
            ship_type: ActiveValue::Set(ship_type),
            respawns_at: ActiveValue::Set(respawns_at.naive_utc()),
            ..Default::default()
        };

        entity::prelude::WsRespawn::insert(respawn)
            .exec_with_returning(self.db)
            .await
    }

    /// Eliminations in the given white stars whose ship has not respawned at `now`, soonest
    /// respawn first.
    pub async fn get_pending(
        &self,
        white_star_ids: &[String],
        now: DateTime<Utc>,
    ) -> Result<Vec<WsRespawnModel>, DbErr> {
        entity::prelude::WsRespawn::find()
            .filter(entity::ws_respawn::Column::WhiteStarId.is_in(white_star_ids.iter().cloned()))
            .filter(entity::ws_respawn::Column::RespawnsAt.gt(now.naive_utc()))
            .order_by_asc(entity::ws_respawn::Column::RespawnsAt)
            .order_by_asc(entity::ws_respawn::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes the most recently recorded pending elimination of a ship.
    ///
    /// Returns `false` when the ship has no pending elimination.
    pub async fn delete_latest_pending(
        &self,
        white_star_id: &str,
        player_id: &str,
        ship_type: ShipType,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let latest = entity::prelude::WsRespawn::find()
            .filter(entity::ws_respawn::Column::WhiteStarId.eq(white_star_id))
            .filter(entity::ws_respawn::Column::PlayerId.eq(player_id))
            .filter(entity::ws_respawn::Column::ShipType.eq(ship_type))
            .filter(entity::ws_respawn::Column::RespawnsAt.gt(now.naive_utc()))
            .order_by_desc(entity::ws_respawn::Column::Id)
            .one(self.db)
            .await?;

        let Some(latest) = latest else {
            return Ok(false);
        };

        let result = entity::prelude::WsRespawn::delete_by_id(latest.id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
