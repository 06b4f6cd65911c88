use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(big_integer(Users::Id).primary_key())
                    .col(big_integer(Users::IsuCoin).default(0))
                    .col(big_integer(Users::LastGetrewardAt))
                    .col(big_integer(Users::LastActivatedAt))
                    .col(big_integer(Users::RegisteredAt))
                    .col(big_integer_null(Users::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Users {
    Table,
    Id,
    IsuCoin,
    LastGetrewardAt,
    LastActivatedAt,
    RegisteredAt,
    DeletedAt,
}
