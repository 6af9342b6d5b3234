use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250426_000001_player::Player, m20250426_000005_white_star::WhiteStar};

static IDX_WS_RESPAWNS_RESPAWNS_AT: &str = "idx-ws_respawns-respawns_at";
static FK_WS_RESPAWNS_PLAYER_ID: &str = "fk-ws_respawns-player_id";
static FK_WS_RESPAWNS_WHITE_STAR_ID: &str = "fk-ws_respawns-white_star_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WsRespawn::Table)
                    .if_not_exists()
                    .col(pk_auto(WsRespawn::Id))
                    .col(string(WsRespawn::PlayerId))
                    .col(string(WsRespawn::WhiteStarId))
                    .col(integer(WsRespawn::ShipType))
                    .col(timestamp(WsRespawn::RespawnsAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WS_RESPAWNS_RESPAWNS_AT)
                    .table(WsRespawn::Table)
                    .col(WsRespawn::RespawnsAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WS_RESPAWNS_PLAYER_ID)
                    .from_tbl(WsRespawn::Table)
                    .from_col(WsRespawn::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_WS_RESPAWNS_WHITE_STAR_ID)
                    .from_tbl(WsRespawn::Table)
                    .from_col(WsRespawn::WhiteStarId)
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
                    .name(FK_WS_RESPAWNS_WHITE_STAR_ID)
                    .table(WsRespawn::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_WS_RESPAWNS_PLAYER_ID)
                    .table(WsRespawn::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WS_RESPAWNS_RESPAWNS_AT)
                    .table(WsRespawn::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WsRespawn::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum WsRespawn {
    #[sea_orm(iden = "ws_respawns")]
    Table,
    Id,
    PlayerId,
    WhiteStarId,
    ShipType,
    RespawnsAt,
}
