use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemMasters::Table)
                    .if_not_exists()
                    .col(big_integer(ItemMasters::Id).primary_key())
                    .col(integer(ItemMasters::ItemType))
                    .col(string(ItemMasters::Name))
                    .col(text(ItemMasters::Description))
                    .col(integer_null(ItemMasters::AmountPerSec))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemMasters::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum ItemMasters {
    Table,
    Id,
    ItemType,
    Name,
    Description,
    AmountPerSec,
}
