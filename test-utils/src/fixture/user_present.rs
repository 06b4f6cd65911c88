//! Present fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating present entity models without database
//! insertion. The default present is a pending coin grant.

use entity::user_present;

/// Default reward kind code (coin).
pub const DEFAULT_ITEM_TYPE: i32 = 1;

/// Default granted quantity.
pub const DEFAULT_AMOUNT: i64 = 10;

/// Default message attached to the present.
pub const DEFAULT_MESSAGE: &str = "Test present";

/// Default send time (2023-01-01T00:00:00Z).
pub const DEFAULT_SENT_AT: i64 = 1_672_531_200;

/// Creates a present entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - user_id: `1`
/// - item_type: `1` (coin)
/// - item_id: `1`
/// - amount: `10`
/// - present_message: `"Test present"`
/// - deleted_at: `None`
///
/// # Returns
/// - `user_present::Model` - In-memory present entity
pub fn entity() -> user_present::Model {
    user_present::Model {
        id: 1,
        user_id: 1,
        sent_at: DEFAULT_SENT_AT,
        item_type: DEFAULT_ITEM_TYPE,
        item_id: 1,
        amount: DEFAULT_AMOUNT,
        present_message: DEFAULT_MESSAGE.to_string(),
        deleted_at: None,
    }
}

/// Creates a present entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let present = fixture::user_present::entity_builder()
///     .item_type(2)
///     .item_id(40)
///     .build();
/// ```
pub fn entity_builder() -> UserPresentEntityBuilder {
    UserPresentEntityBuilder::default()
}

/// Builder for creating customized present entity models.
///
/// All fields have sensible defaults that can be overridden.
pub struct UserPresentEntityBuilder {
    entity: user_present::Model,
}

impl Default for UserPresentEntityBuilder {
    fn default() -> Self {
        Self { entity: entity() }
    }
}

impl UserPresentEntityBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.entity.id = id;
        self
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.entity.user_id = user_id;
        self
    }

    pub fn item_type(mut self, item_type: i32) -> Self {
        self.entity.item_type = item_type;
        self
    }

    pub fn item_id(mut self, item_id: i64) -> Self {
        self.entity.item_id = item_id;
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.entity.amount = amount;
        self
    }

    pub fn deleted_at(mut self, deleted_at: Option<i64>) -> Self {
        self.entity.deleted_at = deleted_at;
        self
    }

    pub fn build(self) -> user_present::Model {
        self.entity
    }
}
