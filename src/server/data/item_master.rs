//! Item catalogue repository.

use crate::server::model::item::ItemMaster;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct ItemMasterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemMasterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads the catalogue entries for the given item IDs.
    ///
    /// Unknown IDs are absent from the result; callers compare against what they asked for.
    pub async fn find_by_ids(&self, item_ids: &[i64]) -> Result<Vec<ItemMaster>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::ItemMaster::find()
            .filter(entity::item_master::Column::Id.is_in(item_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ItemMaster::from_entity).collect())
    }
}
