//! Ban factory for creating test ban rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active ban row for `user_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - User to ban
///
/// # Returns
/// - `Ok(entity::user_ban::Model)` - Created ban row
/// - `Err(DbErr)` - Database error during insert (including a duplicate ban)
pub async fn create_ban(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entity::user_ban::Model, DbErr> {
    entity::user_ban::ActiveModel {
        id: ActiveValue::Set(next_id()),
        user_id: ActiveValue::Set(user_id),
        deleted_at: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}

/// Creates a ban row for `user_id` that was lifted at `at`.
pub async fn create_lifted_ban(
    db: &DatabaseConnection,
    user_id: i64,
    at: i64,
) -> Result<entity::user_ban::Model, DbErr> {
    entity::user_ban::ActiveModel {
        id: ActiveValue::Set(next_id()),
        user_id: ActiveValue::Set(user_id),
        deleted_at: ActiveValue::Set(Some(at)),
    }
    .insert(db)
    .await
}
