use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserItemDto {
    pub id: i64,
    pub user_id: i64,
    pub item_id: i64,
    pub item_type: i32,
    pub amount: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserCardDto {
    pub id: i64,
    pub user_id: i64,
    pub card_id: i64,
    pub amount_per_sec: i32,
    pub level: i32,
    pub total_exp: i64,
}

/// Body of `GET /user/{user_id}/item`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemResponseDto {
    pub user: UserDto,
    pub items: Vec<UserItemDto>,
    pub cards: Vec<UserCardDto>,
}
