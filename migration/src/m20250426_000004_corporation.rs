use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Corporation::Table)
                    .if_not_exists()
                    .col(string(Corporation::Id).primary_key())
                    .col(string(Corporation::Name))
                    .col(integer(Corporation::Symbol))
                    .col(integer(Corporation::Border))
                    .col(integer(Corporation::Color1))
                    .col(integer(Corporation::Color2))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Corporation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Corporation {
    #[sea_orm(iden = "corporations")]
    Table,
    Id,
    Name,
    Symbol,
    Border,
    #[sea_orm(iden = "color_1")]
    Color1,
    #[sea_orm(iden = "color_2")]
    Color2,
}
