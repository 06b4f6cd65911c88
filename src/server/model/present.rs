//! Present domain models.
//!
//! A present is a pending grant of currency, a card or a material, addressed to one user.
//! Redeeming it is the only change a present ever sees after it is sent.

use crate::{
    model::present::UserPresentDto,
    server::{
        error::AppError,
        model::{
            item::{UserCard, UserItem},
            lifecycle::Lifecycle,
            user::User,
        },
    },
};

/// Number of presents returned per listing page.
pub const PRESENTS_PER_PAGE: u64 = 100;

/// What a present grants, decoded from its stored `item_type` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardKind {
    /// Code 1: adds to the user's currency balance.
    Currency,
    /// Code 2: creates one card instance per present.
    Card,
    /// Codes 3 and 4: stack onto the user's material inventory.
    Material,
}

impl TryFrom<i32> for RewardKind {
    type Error = AppError;

    fn try_from(item_type: i32) -> Result<Self, Self::Error> {
        match item_type {
            1 => Ok(Self::Currency),
            2 => Ok(Self::Card),
            3 | 4 => Ok(Self::Material),
            other => Err(AppError::BadRequest(format!(
                "Unknown reward kind {}",
                other
            ))),
        }
    }
}

/// A grant addressed to one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Present {
    pub id: i64,
    pub user_id: i64,
    pub sent_at: i64,
    /// Raw reward code; see `RewardKind`.
    pub item_type: i32,
    pub item_id: i64,
    pub amount: i64,
    pub message: String,
    /// `Inactive` once redeemed, with the redemption time.
    pub lifecycle: Lifecycle,
}

impl Present {
    pub fn reward_kind(&self) -> Result<RewardKind, AppError> {
        RewardKind::try_from(self.item_type)
    }

    /// Returns the present as it looks after redemption at `at`.
    pub fn redeemed(mut self, at: i64) -> Self {
        self.lifecycle = self.lifecycle.deactivate(at);
        self
    }

    pub fn into_dto(self) -> UserPresentDto {
        UserPresentDto {
            id: self.id,
            user_id: self.user_id,
            sent_at: self.sent_at,
            item_type: self.item_type,
            item_id: self.item_id,
            amount: self.amount,
            present_message: self.message,
            deleted_at: self.lifecycle.deleted_at(),
        }
    }

    pub fn from_entity(entity: entity::user_present::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            sent_at: entity.sent_at,
            item_type: entity.item_type,
            item_id: entity.item_id,
            amount: entity.amount,
            message: entity.present_message,
            lifecycle: Lifecycle::from_deleted_at(entity.deleted_at),
        }
    }
}

/// One page of pending presents.
#[derive(Debug, Clone)]
pub struct PresentPage {
    pub presents: Vec<Present>,
    /// Whether another page follows this one.
    pub is_next: bool,
}

/// Resources changed by a redemption call.
///
/// `user` is only set when currency was granted.
#[derive(Debug, Clone, Default)]
pub struct Redemption {
    pub user: Option<User>,
    pub cards: Vec<UserCard>,
    pub items: Vec<UserItem>,
    pub presents: Vec<Present>,
}

impl Redemption {
    /// Folds the outcome of one bucket into this redemption.
    pub fn merge(&mut self, other: Redemption) {
        if other.user.is_some() {
            self.user = other.user;
        }
        self.cards.extend(other.cards);
        self.items.extend(other.items);
        self.presents.extend(other.presents);
    }

    pub fn is_empty(&self) -> bool {
        self.presents.is_empty()
    }
}
