//! User domain models and parameters.

use crate::{model::user::UserDto, server::model::lifecycle::Lifecycle};

/// A player and their currency balance.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    /// Currency balance.
    pub isu_coin: i64,
    /// Last time a login reward was collected (unix seconds).
    pub last_getreward_at: i64,
    /// Last login (unix seconds).
    pub last_activated_at: i64,
    pub registered_at: i64,
    pub lifecycle: Lifecycle,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            isu_coin: self.isu_coin,
            last_getreward_at: self.last_getreward_at,
            last_activated_at: self.last_activated_at,
            registered_at: self.registered_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            isu_coin: entity.isu_coin,
            last_getreward_at: entity.last_getreward_at,
            last_activated_at: entity.last_activated_at,
            registered_at: entity.registered_at,
            lifecycle: Lifecycle::from_deleted_at(entity.deleted_at),
        }
    }
}

/// Parameters for inserting a newly registered user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub id: i64,
    /// Registration time; also used for both activity timestamps.
    pub registered_at: i64,
}
