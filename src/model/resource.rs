use serde::{Deserialize, Serialize};

use crate::model::{
    item::{UserCardDto, UserItemDto},
    present::UserPresentDto,
    user::UserDto,
};

/// Snapshot of every resource a request changed, stamped with the request time.
#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedResourcesDto {
    pub now: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_cards: Option<Vec<UserCardDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_items: Option<Vec<UserItemDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_presents: Option<Vec<UserPresentDto>>,
}
