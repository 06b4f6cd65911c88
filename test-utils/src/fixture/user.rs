//! User fixtures for creating in-memory test data.

use entity::user;

/// Default registration time used by fixtures (2023-01-01T00:00:00Z).
pub const DEFAULT_REGISTERED_AT: i64 = 1_672_531_200;

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - isu_coin: `0`
/// - all timestamps: `DEFAULT_REGISTERED_AT`
/// - deleted_at: `None`
pub fn entity() -> user::Model {
    user::Model {
        id: 1,
        isu_coin: 0,
        last_getreward_at: DEFAULT_REGISTERED_AT,
        last_activated_at: DEFAULT_REGISTERED_AT,
        registered_at: DEFAULT_REGISTERED_AT,
        deleted_at: None,
    }
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    entity: user::Model,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self { entity: entity() }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.entity.id = id;
        self
    }

    pub fn isu_coin(mut self, isu_coin: i64) -> Self {
        self.entity.isu_coin = isu_coin;
        self
    }

    pub fn registered_at(mut self, at: i64) -> Self {
        self.entity.registered_at = at;
        self.entity.last_activated_at = at;
        self.entity.last_getreward_at = at;
        self
    }

    pub fn build(self) -> user::Model {
        self.entity
    }
}
