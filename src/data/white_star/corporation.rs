use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::model::{db::CorporationModel, event::CorporationEntry};

pub struct CorporationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CorporationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts corporations, refreshing name and emblem of those that already exist.
    ///
    /// Entries repeating an earlier ID in the same call are skipped.
    pub async fn upsert_many(
        &self,
        corporations: &[CorporationEntry],
    ) -> Result<Vec<CorporationModel>, DbErr> {
        let mut unique: Vec<&CorporationEntry> = Vec::with_capacity(corporations.len());
        for corporation in corporations {
            if !unique
                .iter()
                .any(|c| c.corporation_id == corporation.corporation_id)
            {
                unique.push(corporation);
            }
        }

        if unique.is_empty() {
            return Ok(Vec::new());
        }

        let corporations = unique
            .into_iter()
            .map(|corporation| entity::corporation::ActiveModel {
                id: ActiveValue::Set(corporation.corporation_id.clone()),
                name: ActiveValue::Set(corporation.name.clone()),
                symbol: ActiveValue::Set(corporation.symbol),
                border: ActiveValue::Set(corporation.border),
                color_1: ActiveValue::Set(corporation.color_1),
                color_2: ActiveValue::Set(corporation.color_2),
            });

        entity::prelude::Corporation::insert_many(corporations)
            .on_conflict(
                OnConflict::column(entity::corporation::Column::Id)
                    .update_columns([
                        entity::corporation::Column::Name,
                        entity::corporation::Column::Symbol,
                        entity::corporation::Column::Border,
                        entity::corporation::Column::Color1,
                        entity::corporation::Column::Color2,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_many(
        &self,
        corporation_ids: &[String],
    ) -> Result<Vec<CorporationModel>, DbErr> {
        entity::prelude::Corporation::find()
            .filter(entity::corporation::Column::Id.is_in(corporation_ids.iter().cloned()))
            .all(self.db)
            .await
    }
}
