use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::db::VarModel;

/// Key/value settings that must survive restarts.
pub struct VarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VarRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the value stored under `key`.
    ///
    /// A missing key and a NULL value both yield `None`.
    pub async fn get_value(&self, key: &str) -> Result<Option<String>, DbErr> {
        let var = entity::prelude::Var::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(var.and_then(|var| var.value))
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub async fn upsert(&self, key: &str, value: Option<String>) -> Result<VarModel, DbErr> {
        let var = entity::var::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value),
        };

        entity::prelude::Var::insert(var)
            .on_conflict(
                OnConflict::column(entity::var::Column::Key)
                    .update_column(entity::var::Column::Value)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
