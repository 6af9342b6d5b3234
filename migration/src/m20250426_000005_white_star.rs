use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250426_000004_corporation::Corporation;

static IDX_WHITE_STARS_STARTED_AT: &str = "idx-white_stars-started_at";
static FK_WHITE_STARS_OUR_CORPORATION_ID: &str = "fk-white_stars-our_corporation_id";
static FK_WHITE_STARS_OPPONENT_CORPORATION_ID: &str = "fk-white_stars-opponent_corporation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WhiteStar::Table)
                    .if_not_exists()
                    .col(string(WhiteStar::Id).primary_key())
                    .col(timestamp(WhiteStar::StartedAt))
                    .col(string(WhiteStar::OurCorporationId))
                    .col(string(WhiteStar::OpponentCorporationId))
                    .col(integer(WhiteStar::Slot))
                    .col(boolean(WhiteStar::Underdog))
                    .col(big_integer_null(WhiteStar::XpGained))
                    .col(big_integer_null(WhiteStar::OurScore))
                    .col(big_integer_null(WhiteStar::OpponentScore))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WHITE_STARS_STARTED_AT)
                    .table(WhiteStar::Table)
                    .col(WhiteStar::StartedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WHITE_STARS_OUR_CORPORATION_ID)
                    .from_tbl(WhiteStar::Table)
                    .from_col(WhiteStar::OurCorporationId)
                    .to_tbl(Corporation::Table)
                    .to_col(Corporation::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WHITE_STARS_OPPONENT_CORPORATION_ID)
                    .from_tbl(WhiteStar::Table)
                    .from_col(WhiteStar::OpponentCorporationId)
                    .to_tbl(Corporation::Table)
                    .to_col(Corporation::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WHITE_STARS_OPPONENT_CORPORATION_ID)
                    .table(WhiteStar::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WHITE_STARS_OUR_CORPORATION_ID)
                    .table(WhiteStar::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WHITE_STARS_STARTED_AT)
                    .table(WhiteStar::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WhiteStar::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WhiteStar {
    #[sea_orm(iden = "white_stars")]
    Table,
    Id,
    StartedAt,
    OurCorporationId,
    OpponentCorporationId,
    Slot,
    Underdog,
    XpGained,
    OurScore,
    OpponentScore,
}
