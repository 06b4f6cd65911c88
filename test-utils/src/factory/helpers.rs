//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating rows
//! together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Starts well above the IDs tests tend to hard-code so factory rows never
/// collide with explicitly numbered ones.
static COUNTER: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(10_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `i64` - Next unique counter value
pub fn next_id() -> i64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a pending present addressed to them.
///
/// # Arguments
/// - `db` - Database connection
/// - `item_type` - Reward kind code stored on the present
/// - `item_id` - Catalogue reference of the reward
/// - `amount` - Quantity granted
///
/// # Returns
/// - `Ok((user, present))` - Tuple of created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_present(
    db: &DatabaseConnection,
    item_type: i32,
    item_id: i64,
    amount: i64,
) -> Result<(entity::user::Model, entity::user_present::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let present = crate::factory::user_present::UserPresentFactory::new(db, user.id)
        .item_type(item_type)
        .item_id(item_id)
        .amount(amount)
        .build()
        .await?;

    Ok((user, present))
}
