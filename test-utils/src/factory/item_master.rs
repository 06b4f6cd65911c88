//! Item catalogue factory.

use crate::fixture;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, IntoActiveModel};

/// Inserts a card catalogue row producing `amount_per_sec`.
pub async fn create_card_master(
    db: &DatabaseConnection,
    id: i64,
    amount_per_sec: i32,
) -> Result<entity::item_master::Model, DbErr> {
    fixture::item_master::card(id, amount_per_sec)
        .into_active_model()
        .insert(db)
        .await
}

/// Inserts a material catalogue row of the given material type (3 or 4).
pub async fn create_material_master(
    db: &DatabaseConnection,
    id: i64,
    item_type: i32,
) -> Result<entity::item_master::Model, DbErr> {
    fixture::item_master::material(id, item_type)
        .into_active_model()
        .insert(db)
        .await
}
