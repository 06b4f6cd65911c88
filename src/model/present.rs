use serde::{Deserialize, Serialize};

use crate::model::resource::UpdatedResourcesDto;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserPresentDto {
    pub id: i64,
    pub user_id: i64,
    pub sent_at: i64,
    pub item_type: i32,
    pub item_id: i64,
    pub amount: i64,
    pub present_message: String,
    /// Redemption time, absent while the present is still pending.
    pub deleted_at: Option<i64>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPresentResponseDto {
    pub presents: Vec<UserPresentDto>,
    pub is_next: bool,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivePresentRequestDto {
    pub present_ids: Vec<i64>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivePresentResponseDto {
    pub updated_resources: UpdatedResourcesDto,
}
