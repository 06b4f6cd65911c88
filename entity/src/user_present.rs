use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_presents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    #[sea_orm(indexed)]
    pub user_id: i64,
    pub sent_at: i64,
    /// 1 = coin, 2 = card, 3 and 4 = enhancement materials.
    pub item_type: i32,
    pub item_id: i64,
    pub amount: i64,
    pub present_message: String,
    /// Redemption time; `None` while the present is pending.
    pub deleted_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
