use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of `GET /health`.
#[derive(Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub partitions: usize,
}

/// Body of `POST /initialize`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResponseDto {
    pub banned_users: usize,
}
