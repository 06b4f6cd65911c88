use serde::{Deserialize, Serialize};

use crate::model::resource::UpdatedResourcesDto;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub isu_coin: i64,
    pub last_getreward_at: i64,
    pub last_activated_at: i64,
    pub registered_at: i64,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponseDto {
    pub user_id: i64,
    pub session_id: String,
    pub updated_resources: UpdatedResourcesDto,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestDto {
    pub user_id: i64,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub session_id: String,
    pub updated_resources: UpdatedResourcesDto,
}
