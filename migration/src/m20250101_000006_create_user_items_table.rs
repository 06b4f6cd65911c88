use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserItems::Table)
                    .if_not_exists()
                    .col(big_integer(UserItems::Id).primary_key())
                    .col(big_integer(UserItems::UserId))
                    .col(big_integer(UserItems::ItemId))
                    .col(integer(UserItems::ItemType))
                    .col(big_integer(UserItems::Amount))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_items_user_id_item_id")
                    .table(UserItems::Table)
                    .col(UserItems::UserId)
                    .col(UserItems::ItemId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum UserItems {
    Table,
    Id,
    UserId,
    ItemId,
    ItemType,
    Amount,
}
