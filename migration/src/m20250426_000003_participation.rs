use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250426_000001_player::Player, m20250426_000002_star::Star};

static IDX_PARTICIPATION_STAR_ID: &str = "idx-participation-star_id";
static FK_PARTICIPATION_PLAYER_ID: &str = "fk-participation-player_id";
static FK_PARTICIPATION_STAR_ID: &str = "fk-participation-star_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Participation::Table)
                    .if_not_exists()
                    .col(pk_auto(Participation::Id))
                    .col(string(Participation::PlayerId))
                    .col(string(Participation::StarId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PARTICIPATION_STAR_ID)
                    .table(Participation::Table)
                    .col(Participation::StarId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PARTICIPATION_PLAYER_ID)
                    .from_tbl(Participation::Table)
                    .from_col(Participation::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PARTICIPATION_STAR_ID)
                    .from_tbl(Participation::Table)
                    .from_col(Participation::StarId)
                    .to_tbl(Star::Table)
                    .to_col(Star::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PARTICIPATION_STAR_ID)
                    .table(Participation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PARTICIPATION_PLAYER_ID)
                    .table(Participation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PARTICIPATION_STAR_ID)
                    .table(Participation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Participation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Participation {
    Table,
    Id,
    PlayerId,
    StarId,
}
