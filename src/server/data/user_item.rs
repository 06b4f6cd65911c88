//! Material inventory repository.

use crate::server::model::item::{CreateUserItemParam, UserItem};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct UserItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the user's stack of `item_id`, if they hold one.
    pub async fn find_by_user_and_item(
        &self,
        user_id: i64,
        item_id: i64,
    ) -> Result<Option<UserItem>, DbErr> {
        let entity = entity::prelude::UserItem::find()
            .filter(entity::user_item::Column::UserId.eq(user_id))
            .filter(entity::user_item::Column::ItemId.eq(item_id))
            .one(self.db)
            .await?;

        Ok(entity.map(UserItem::from_entity))
    }

    /// Creates a stack on first grant.
    pub async fn create(&self, param: CreateUserItemParam) -> Result<UserItem, DbErr> {
        let entity = entity::user_item::ActiveModel {
            id: ActiveValue::Set(param.id),
            user_id: ActiveValue::Set(param.user_id),
            item_id: ActiveValue::Set(param.item_id),
            item_type: ActiveValue::Set(param.item_type),
            amount: ActiveValue::Set(param.amount),
        }
        .insert(self.db)
        .await?;

        Ok(UserItem::from_entity(entity))
    }

    /// Overwrites the quantity of an existing stack.
    pub async fn set_amount(&self, id: i64, amount: i64) -> Result<UserItem, DbErr> {
        let entity = entity::user_item::ActiveModel {
            id: ActiveValue::Unchanged(id),
            amount: ActiveValue::Set(amount),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(UserItem::from_entity(entity))
    }

    /// Lists every stack the user holds, ordered by item ID.
    pub async fn get_by_user(&self, user_id: i64) -> Result<Vec<UserItem>, DbErr> {
        let entities = entity::prelude::UserItem::find()
            .filter(entity::user_item::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_item::Column::ItemId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(UserItem::from_entity).collect())
    }
}
