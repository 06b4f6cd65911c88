//! Item catalogue fixtures.

use entity::item_master;

/// Creates a card catalogue entry.
pub fn card(id: i64, amount_per_sec: i32) -> item_master::Model {
    item_master::Model {
        id,
        item_type: 2,
        name: format!("Card {}", id),
        description: "Test card".to_string(),
        amount_per_sec: Some(amount_per_sec),
    }
}

/// Creates a material catalogue entry of the given material type.
pub fn material(id: i64, item_type: i32) -> item_master::Model {
    item_master::Model {
        id,
        item_type,
        name: format!("Material {}", id),
        description: "Test material".to_string(),
        amount_per_sec: None,
    }
}
