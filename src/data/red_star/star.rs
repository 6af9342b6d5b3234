use chrono::{DateTime, Utc};
use migration::Expr;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    model::{db::StarModel, event::StarStarted},
    util::season::Timeframe,
};

pub struct StarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an open star.
    ///
    /// Fails with a unique constraint violation if a star with the same ID exists.
    pub async fn create(&self, event: &StarStarted) -> Result<StarModel, DbErr> {
        let star = entity::star::ActiveModel {
            id: ActiveValue::Set(event.star_id.clone()),
            level: ActiveValue::Set(event.level),
            dark: ActiveValue::Set(event.dark),
            started_at: ActiveValue::Set(event.timestamp.naive_utc()),
            ended_at: ActiveValue::Set(None),
            points: ActiveValue::Set(None),
            player_count: ActiveValue::Set(None),
        };

        entity::prelude::Star::insert(star)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get(&self, star_id: &str) -> Result<Option<StarModel>, DbErr> {
        entity::prelude::Star::find_by_id(star_id.to_string())
            .one(self.db)
            .await
    }

    /// Records the end of a run.
    ///
    /// Returns the number of rows updated, 0 when no star has the given ID.
    pub async fn close(
        &self,
        star_id: &str,
        ended_at: DateTime<Utc>,
        points: i64,
        player_count: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Star::update_many()
            .col_expr(
                entity::star::Column::EndedAt,
                Expr::value(ended_at.naive_utc()),
            )
            .col_expr(entity::star::Column::Points, Expr::value(points))
            .col_expr(entity::star::Column::PlayerCount, Expr::value(player_count))
            .filter(entity::star::Column::Id.eq(star_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Closed stars whose run intersects the timeframe, oldest first.
    pub async fn get_closed_in_timeframe(
        &self,
        timeframe: &Timeframe,
    ) -> Result<Vec<StarModel>, DbErr> {
        entity::prelude::Star::find()
            .filter(entity::star::Column::EndedAt.is_not_null())
            .filter(entity::star::Column::StartedAt.lt(timeframe.ends_at.naive_utc()))
            .filter(entity::star::Column::EndedAt.gt(timeframe.starts_at.naive_utc()))
            .order_by_asc(entity::star::Column::StartedAt)
            .all(self.db)
            .await
    }

    /// Sum of raw points over the closed stars intersecting the timeframe.
    ///
    /// Returns `None` when no star matches.
    pub async fn get_points_in_timeframe(
        &self,
        timeframe: &Timeframe,
    ) -> Result<Option<i64>, DbErr> {
        let points = entity::prelude::Star::find()
            .select_only()
            .column(entity::star::Column::Points)
            .filter(entity::star::Column::EndedAt.is_not_null())
            .filter(entity::star::Column::StartedAt.lt(timeframe.ends_at.naive_utc()))
            .filter(entity::star::Column::EndedAt.gt(timeframe.starts_at.naive_utc()))
            .into_tuple::<Option<i64>>()
            .all(self.db)
            .await?;

        if points.is_empty() {
            return Ok(None);
        }

        Ok(Some(points.into_iter().flatten().sum()))
    }
}
