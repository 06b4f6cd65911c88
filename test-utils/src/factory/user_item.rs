//! Inventory factory for seeding material stacks.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an inventory row holding `amount` of `item_id` for `user_id`.
pub async fn create_user_item(
    db: &DatabaseConnection,
    user_id: i64,
    item_id: i64,
    item_type: i32,
    amount: i64,
) -> Result<entity::user_item::Model, DbErr> {
    entity::user_item::ActiveModel {
        id: ActiveValue::Set(next_id()),
        user_id: ActiveValue::Set(user_id),
        item_id: ActiveValue::Set(item_id),
        item_type: ActiveValue::Set(item_type),
        amount: ActiveValue::Set(amount),
    }
    .insert(db)
    .await
}
