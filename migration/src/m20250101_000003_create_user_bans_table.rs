use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBans::Table)
                    .if_not_exists()
                    .col(big_integer(UserBans::Id).primary_key())
                    .col(big_integer_uniq(UserBans::UserId))
                    .col(big_integer_null(UserBans::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum UserBans {
    Table,
    Id,
    UserId,
    DeletedAt,
}
