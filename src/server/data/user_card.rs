//! Card inventory repository.

use crate::server::model::item::{CreateUserCardParam, UserCard};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Level a freshly granted card starts at.
const INITIAL_CARD_LEVEL: i32 = 1;

pub struct UserCardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserCardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new card at level 1 with no experience.
    ///
    /// # Returns
    /// - `Ok(UserCard)` - The created card
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserCardParam) -> Result<UserCard, DbErr> {
        let entity = entity::user_card::ActiveModel {
            id: ActiveValue::Set(param.id),
            user_id: ActiveValue::Set(param.user_id),
            card_id: ActiveValue::Set(param.card_id),
            amount_per_sec: ActiveValue::Set(param.amount_per_sec),
            level: ActiveValue::Set(INITIAL_CARD_LEVEL),
            total_exp: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await?;

        Ok(UserCard::from_entity(entity))
    }

    /// Lists every card the user owns, ordered by ID.
    pub async fn get_by_user(&self, user_id: i64) -> Result<Vec<UserCard>, DbErr> {
        let entities = entity::prelude::UserCard::find()
            .filter(entity::user_card::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_card::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserCard::from_entity).collect())
    }
}
