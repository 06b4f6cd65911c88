//! Ban data repository.

use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

pub struct BanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BanRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a ban for `user_id`.
    ///
    /// Banning an already banned user leaves the existing row untouched. A lifted ban row
    /// is reactivated in place by clearing its `deleted_at`.
    ///
    /// # Arguments
    /// - `id` - ID for the ban row if one is inserted
    /// - `user_id` - User to ban
    ///
    /// # Returns
    /// - `Ok(true)` - A ban row was inserted or reactivated
    /// - `Ok(false)` - The user already had an active ban row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn upsert(&self, id: i64, user_id: i64) -> Result<bool, DbErr> {
        let inserted = entity::prelude::UserBan::insert(entity::user_ban::ActiveModel {
            id: ActiveValue::Set(id),
            user_id: ActiveValue::Set(user_id),
            deleted_at: ActiveValue::Set(None),
        })
        .on_conflict(
            OnConflict::column(entity::user_ban::Column::UserId)
                .value(
                    entity::user_ban::Column::DeletedAt,
                    Expr::value(Option::<i64>::None),
                )
                .action_and_where(entity::user_ban::Column::DeletedAt.is_not_null())
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Lists the IDs of every user with an active ban in this partition.
    ///
    /// # Returns
    /// - `Ok(Vec<i64>)` - Banned user IDs (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_active_user_ids(&self) -> Result<Vec<i64>, DbErr> {
        entity::prelude::UserBan::find()
            .select_only()
            .column(entity::user_ban::Column::UserId)
            .filter(entity::user_ban::Column::DeletedAt.is_null())
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }
}
