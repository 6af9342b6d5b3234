use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Var::Table)
                    .if_not_exists()
                    .col(string(Var::Key).primary_key())
                    .col(string_null(Var::Value))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Var::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Var {
    #[sea_orm(iden = "vars")]
    Table,
    Key,
    Value,
}
