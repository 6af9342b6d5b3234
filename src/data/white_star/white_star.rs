use chrono::{DateTime, Utc};
use migration::Expr;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    db::WhiteStarModel,
    event::{DuelEnded, DuelStarted},
};

pub struct WhiteStarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WhiteStarRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a white star whose end-of-match fields are still unknown.
    ///
    /// Both corporations must already exist.
    pub async fn create(&self, event: &DuelStarted) -> Result<WhiteStarModel, DbErr> {
        let white_star = entity::white_star::ActiveModel {
            id: ActiveValue::Set(event.white_star_id.clone()),
            started_at: ActiveValue::Set(event.timestamp.naive_utc()),
            our_corporation_id: ActiveValue::Set(event.corporation.corporation_id.clone()),
            opponent_corporation_id: ActiveValue::Set(event.opponent.corporation_id.clone()),
            slot: ActiveValue::Set(event.slot),
            underdog: ActiveValue::Set(event.underdog),
            xp_gained: ActiveValue::Set(None),
            our_score: ActiveValue::Set(None),
            opponent_score: ActiveValue::Set(None),
        };

        entity::prelude::WhiteStar::insert(white_star)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get(&self, white_star_id: &str) -> Result<Option<WhiteStarModel>, DbErr> {
        entity::prelude::WhiteStar::find_by_id(white_star_id.to_string())
            .one(self.db)
            .await
    }

    /// Stores the final scores of a match.
    ///
    /// Returns the number of rows updated, 0 when no white star has the given ID.
    pub async fn finish(&self, event: &DuelEnded) -> Result<u64, DbErr> {
        let result = entity::prelude::WhiteStar::update_many()
            .col_expr(
                entity::white_star::Column::XpGained,
                Expr::value(event.xp_gained),
            )
            .col_expr(
                entity::white_star::Column::OurScore,
                Expr::value(event.our_score),
            )
            .col_expr(
                entity::white_star::Column::OpponentScore,
                Expr::value(event.opponent_score),
            )
            .filter(entity::white_star::Column::Id.eq(event.white_star_id.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// White stars started in `(since, until]`, most recent first.
    pub async fn get_started_between(
        &self,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<WhiteStarModel>, DbErr> {
        entity::prelude::WhiteStar::find()
            .filter(entity::white_star::Column::StartedAt.gt(since.naive_utc()))
            .filter(entity::white_star::Column::StartedAt.lte(until.naive_utc()))
            .order_by_desc(entity::white_star::Column::StartedAt)
            .all(self.db)
            .await
    }
}
