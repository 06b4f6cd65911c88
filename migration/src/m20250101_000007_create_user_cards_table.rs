use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserCards::Table)
                    .if_not_exists()
                    .col(big_integer(UserCards::Id).primary_key())
                    .col(big_integer(UserCards::UserId))
                    .col(big_integer(UserCards::CardId))
                    .col(integer(UserCards::AmountPerSec))
                    .col(integer(UserCards::Level))
                    .col(big_integer(UserCards::TotalExp))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_cards_user_id")
                    .table(UserCards::Table)
                    .col(UserCards::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserCards::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum UserCards {
    Table,
    Id,
    UserId,
    CardId,
    AmountPerSec,
    Level,
    TotalExp,
}
