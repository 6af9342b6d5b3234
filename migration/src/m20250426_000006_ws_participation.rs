use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250426_000001_player::Player, m20250426_000005_white_star::WhiteStar};

static IDX_WS_PARTICIPATION_RANK_INDEX: &str = "idx-ws_participation-rank_index";
static FK_WS_PARTICIPATION_PLAYER_ID: &str = "fk-ws_participation-player_id";
static FK_WS_PARTICIPATION_WHITE_STAR_ID: &str = "fk-ws_participation-white_star_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WsParticipation::Table)
                    .if_not_exists()
                    .col(pk_auto(WsParticipation::Id))
                    .col(string(WsParticipation::PlayerId))
                    .col(string(WsParticipation::WhiteStarId))
                    .col(boolean(WsParticipation::Opponent))
                    .col(integer(WsParticipation::RankIndex))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WS_PARTICIPATION_RANK_INDEX)
                    .table(WsParticipation::Table)
                    .col(WsParticipation::RankIndex)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WS_PARTICIPATION_PLAYER_ID)
                    .from_tbl(WsParticipation::Table)
                    .from_col(WsParticipation::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WS_PARTICIPATION_WHITE_STAR_ID)
                    .from_tbl(WsParticipation::Table)
                    .from_col(WsParticipation::WhiteStarId)
                    .to_tbl(WhiteStar::Table)
                    .to_col(WhiteStar::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WS_PARTICIPATION_WHITE_STAR_ID)
                    .table(WsParticipation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WS_PARTICIPATION_PLAYER_ID)
                    .table(WsParticipation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WS_PARTICIPATION_RANK_INDEX)
                    .table(WsParticipation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WsParticipation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum WsParticipation {
    Table,
    Id,
    PlayerId,
    WhiteStarId,
    Opponent,
    RankIndex,
}
