use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{model::api::HealthDto, server::state::AppState};

/// GET /health - Liveness probe
///
/// # Returns
/// - `200 OK`: JSON `HealthDto` with the number of configured partitions
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
            partitions: state.shards.len(),
        }),
    )
}
