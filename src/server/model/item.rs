//! Inventory, card and catalogue domain models.

use crate::model::item::{UserCardDto, UserItemDto};

/// Catalogue entry describing a grantable item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemMaster {
    pub id: i64,
    pub item_type: i32,
    pub name: String,
    pub description: String,
    /// Currency produced per second by a card of this kind, if it is a card.
    pub amount_per_sec: Option<i32>,
}

impl ItemMaster {
    pub fn from_entity(entity: entity::item_master::Model) -> Self {
        Self {
            id: entity.id,
            item_type: entity.item_type,
            name: entity.name,
            description: entity.description,
            amount_per_sec: entity.amount_per_sec,
        }
    }
}

/// A stack of one material held by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserItem {
    pub id: i64,
    pub user_id: i64,
    pub item_id: i64,
    pub item_type: i32,
    pub amount: i64,
}

impl UserItem {
    pub fn into_dto(self) -> UserItemDto {
        UserItemDto {
            id: self.id,
            user_id: self.user_id,
            item_id: self.item_id,
            item_type: self.item_type,
            amount: self.amount,
        }
    }

    pub fn from_entity(entity: entity::user_item::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            item_id: entity.item_id,
            item_type: entity.item_type,
            amount: entity.amount,
        }
    }
}

/// Parameters for creating a material stack on first grant.
#[derive(Debug, Clone)]
pub struct CreateUserItemParam {
    pub id: i64,
    pub user_id: i64,
    pub item_id: i64,
    pub item_type: i32,
    pub amount: i64,
}

/// One card instance owned by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCard {
    pub id: i64,
    pub user_id: i64,
    pub card_id: i64,
    pub amount_per_sec: i32,
    pub level: i32,
    pub total_exp: i64,
}

impl UserCard {
    pub fn into_dto(self) -> UserCardDto {
        UserCardDto {
            id: self.id,
            user_id: self.user_id,
            card_id: self.card_id,
            amount_per_sec: self.amount_per_sec,
            level: self.level,
            total_exp: self.total_exp,
        }
    }

    pub fn from_entity(entity: entity::user_card::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            card_id: entity.card_id,
            amount_per_sec: entity.amount_per_sec,
            level: entity.level,
            total_exp: entity.total_exp,
        }
    }
}

/// Parameters for inserting a freshly granted card.
#[derive(Debug, Clone)]
pub struct CreateUserCardParam {
    pub id: i64,
    pub user_id: i64,
    pub card_id: i64,
    pub amount_per_sec: i32,
}

/// Everything shown on a user's inventory screen.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub user: super::user::User,
    pub items: Vec<UserItem>,
    pub cards: Vec<UserCard>,
}
