//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in a partition.
//! It handles user creation, balance updates and activity tracking with conversion between
//! entity models and domain models at the infrastructure boundary.

use crate::server::model::user::{CreateUserParam, User};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to a connection (pool or transaction) and provides
/// methods for creating, reading and updating user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the partition connection or an open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a newly registered user with a zero balance.
    ///
    /// All three timestamps are set to the registration time.
    ///
    /// # Arguments
    /// - `param` - ID and registration time of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert (including a duplicate ID)
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(param.id),
            isu_coin: ActiveValue::Set(0),
            last_getreward_at: ActiveValue::Set(param.registered_at),
            last_activated_at: ActiveValue::Set(param.registered_at),
            registered_at: ActiveValue::Set(param.registered_at),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds an active (not soft-deleted) user by ID.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No active user with that ID in this partition
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Overwrites the user's currency balance.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `isu_coin` - New balance
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotUpdated)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_balance(&self, user_id: i64, isu_coin: i64) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            isu_coin: ActiveValue::Set(isu_coin),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Records a login at `at`.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_last_activated(&self, user_id: i64, at: i64) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(user_id),
            last_activated_at: ActiveValue::Set(at),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }
}
