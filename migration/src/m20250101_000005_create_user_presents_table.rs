use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPresents::Table)
                    .if_not_exists()
                    .col(big_integer(UserPresents::Id).primary_key())
                    .col(big_integer(UserPresents::UserId))
                    .col(big_integer(UserPresents::SentAt))
                    .col(integer(UserPresents::ItemType))
                    .col(big_integer(UserPresents::ItemId))
                    .col(big_integer(UserPresents::Amount))
                    .col(text(UserPresents::PresentMessage))
                    .col(big_integer_null(UserPresents::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_presents_user_id_deleted_at")
                    .table(UserPresents::Table)
                    .col(UserPresents::UserId)
                    .col(UserPresents::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserPresents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum UserPresents {
    Table,
    Id,
    UserId,
    SentAt,
    ItemType,
    ItemId,
    Amount,
    PresentMessage,
    DeletedAt,
}
