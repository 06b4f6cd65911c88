//! Present data repository.
//!
//! This module provides the `PresentRepository` for reading pending presents and marking
//! them redeemed. Redemption is a guarded update on `deleted_at IS NULL`, so the number of
//! affected rows tells a caller whether a concurrent redemption got there first.

use crate::server::model::present::Present;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

/// Repository providing database operations for presents.
pub struct PresentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PresentRepository<'a, C> {
    /// Creates a new PresentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the partition connection or an open transaction
    ///
    /// # Returns
    /// - `PresentRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Fetches the requested presents that belong to `user_id` and are still pending.
    ///
    /// IDs that are unknown, belong to another user or are already redeemed are silently
    /// left out of the result.
    ///
    /// # Arguments
    /// - `user_id` - Recipient the presents must belong to
    /// - `present_ids` - Requested present IDs
    ///
    /// # Returns
    /// - `Ok(Vec<Present>)` - Pending presents, ordered by ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_pending_by_ids(
        &self,
        user_id: i64,
        present_ids: &[i64],
    ) -> Result<Vec<Present>, DbErr> {
        if present_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::UserPresent::find()
            .filter(entity::user_present::Column::UserId.eq(user_id))
            .filter(entity::user_present::Column::Id.is_in(present_ids.iter().copied()))
            .filter(entity::user_present::Column::DeletedAt.is_null())
            .order_by_asc(entity::user_present::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Present::from_entity).collect())
    }

    /// Gets a window of the user's pending presents, newest first.
    ///
    /// Presents sent at the same instant are ordered by ascending ID.
    ///
    /// # Arguments
    /// - `user_id` - Recipient
    /// - `offset` - Number of presents to skip
    /// - `limit` - Maximum number of presents to return
    ///
    /// # Returns
    /// - `Ok(Vec<Present>)` - Pending presents in the window
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_pending_window(
        &self,
        user_id: i64,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Present>, DbErr> {
        let entities = entity::prelude::UserPresent::find()
            .filter(entity::user_present::Column::UserId.eq(user_id))
            .filter(entity::user_present::Column::DeletedAt.is_null())
            .order_by_desc(entity::user_present::Column::SentAt)
            .order_by_asc(entity::user_present::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Present::from_entity).collect())
    }

    /// Marks the given presents redeemed at `at`, touching only those still pending.
    ///
    /// # Arguments
    /// - `user_id` - Recipient the presents must belong to
    /// - `present_ids` - Presents to mark
    /// - `at` - Redemption time
    ///
    /// # Returns
    /// - `Ok(count)` - Number of presents that moved from pending to redeemed
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_redeemed(
        &self,
        user_id: i64,
        present_ids: &[i64],
        at: i64,
    ) -> Result<u64, DbErr> {
        if present_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::UserPresent::update_many()
            .col_expr(entity::user_present::Column::DeletedAt, Expr::value(at))
            .filter(entity::user_present::Column::UserId.eq(user_id))
            .filter(entity::user_present::Column::Id.is_in(present_ids.iter().copied()))
            .filter(entity::user_present::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
