use sea_orm_migration::{prelude::*, schema::*};

static IDX_STARS_STARTED_AT: &str = "idx-stars-started_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Star::Table)
                    .if_not_exists()
                    .col(string(Star::Id).primary_key())
                    .col(integer(Star::Level))
                    .col(boolean(Star::Dark))
                    .col(timestamp(Star::StartedAt))
                    .col(timestamp_null(Star::EndedAt))
                    .col(big_integer_null(Star::Points))
                    .col(integer_null(Star::PlayerCount))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STARS_STARTED_AT)
                    .table(Star::Table)
                    .col(Star::StartedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STARS_STARTED_AT)
                    .table(Star::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Star::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Star {
    #[sea_orm(iden = "stars")]
    Table,
    Id,
    Level,
    Dark,
    StartedAt,
    EndedAt,
    Points,
    PlayerCount,
}
