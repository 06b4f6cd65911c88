//! Present factory for creating pending reward grants.
//!
//! This module provides factory methods for creating present rows with sensible
//! defaults. Presents default to a pending coin grant so most tests only override the
//! reward kind and amount.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, IntoActiveModel};

/// Factory for creating test presents with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_present::UserPresentFactory;
///
/// let present = UserPresentFactory::new(&db, user.id)
///     .item_type(3)
///     .item_id(7)
///     .amount(3)
///     .build()
///     .await?;
/// ```
pub struct UserPresentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::user_present::Model,
}

impl<'a> UserPresentFactory<'a> {
    /// Creates a new UserPresentFactory with defaults from `fixture::user_present::entity()`.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Recipient of the present
    pub fn new(db: &'a DatabaseConnection, user_id: i64) -> Self {
        let entity = fixture::user_present::entity_builder()
            .id(next_id())
            .user_id(user_id)
            .build();
        Self { db, entity }
    }

    /// Sets the present ID.
    pub fn id(mut self, id: i64) -> Self {
        self.entity.id = id;
        self
    }

    /// Sets the reward kind code (1 coin, 2 card, 3/4 material).
    pub fn item_type(mut self, item_type: i32) -> Self {
        self.entity.item_type = item_type;
        self
    }

    /// Sets the catalogue reference.
    pub fn item_id(mut self, item_id: i64) -> Self {
        self.entity.item_id = item_id;
        self
    }

    /// Sets the granted quantity.
    pub fn amount(mut self, amount: i64) -> Self {
        self.entity.amount = amount;
        self
    }

    /// Sets the send time (unix seconds).
    pub fn sent_at(mut self, sent_at: i64) -> Self {
        self.entity.sent_at = sent_at;
        self
    }

    /// Marks the present as already redeemed at `at`.
    pub fn redeemed_at(mut self, at: i64) -> Self {
        self.entity.deleted_at = Some(at);
        self
    }

    /// Builds and inserts the present row.
    pub async fn build(self) -> Result<entity::user_present::Model, DbErr> {
        self.entity.into_active_model().insert(self.db).await
    }
}

/// Creates a pending coin present of `amount` for `user_id`.
pub async fn create_coin_present(
    db: &DatabaseConnection,
    user_id: i64,
    amount: i64,
) -> Result<entity::user_present::Model, DbErr> {
    UserPresentFactory::new(db, user_id)
        .item_type(1)
        .item_id(1)
        .amount(amount)
        .build()
        .await
}
