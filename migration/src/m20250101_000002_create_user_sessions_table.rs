use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserSessions::Table)
                    .if_not_exists()
                    .col(big_integer(UserSessions::Id).primary_key())
                    .col(big_integer(UserSessions::UserId))
                    .col(string(UserSessions::SessionId))
                    .col(big_integer(UserSessions::ExpiredAt))
                    .col(big_integer_null(UserSessions::DeletedAt))
                    .to_owned(),
            )
            .await?;

        // Sessions are looked up by token on every authenticated request
        manager
            .create_index(
                Index::create()
                    .name("idx_user_sessions_session_id")
                    .table(UserSessions::Table)
                    .col(UserSessions::SessionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_sessions_user_id")
                    .table(UserSessions::Table)
                    .col(UserSessions::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserSessions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum UserSessions {
    Table,
    Id,
    UserId,
    SessionId,
    ExpiredAt,
    DeletedAt,
}
