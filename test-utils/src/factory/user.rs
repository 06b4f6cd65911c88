//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, IntoActiveModel};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .id(42)
///     .isu_coin(100)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::user::Model,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults come from `fixture::user::entity()` with a unique auto-incremented ID.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::user::entity_builder().id(next_id()).build();
        Self { db, entity }
    }

    /// Sets the user ID.
    ///
    /// Tests exercising the shard router pick IDs explicitly so the owning partition is
    /// known in advance.
    pub fn id(mut self, id: i64) -> Self {
        self.entity.id = id;
        self
    }

    /// Sets the currency balance.
    pub fn isu_coin(mut self, isu_coin: i64) -> Self {
        self.entity.isu_coin = isu_coin;
        self
    }

    /// Sets the last activity timestamp (unix seconds).
    pub fn last_activated_at(mut self, at: i64) -> Self {
        self.entity.last_activated_at = at;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        self.entity.into_active_model().insert(self.db).await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific ID.
///
/// Shorthand for `UserFactory::new(db).id(id).build().await`.
pub async fn create_user_with_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).id(id).build().await
}
