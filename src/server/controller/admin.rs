use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::InitializeResponseDto,
    server::{
        error::AppError,
        middleware::{
            auth::AdminGuard,
            context::{valid_user_id, ApiPath},
        },
        service::ban::BanService,
        state::AppState,
    },
};

/// GET /admin/generate - Issue an ID from this node's local generator
///
/// Other nodes configured with this node as their ID root call this endpoint for every ID
/// they need. Always draws locally, even if this node itself has a root configured.
///
/// # Returns
/// - `200 OK`: The new ID as plain text
pub async fn generate_id(State(state): State<AppState>) -> impl IntoResponse {
    let id = state.id_generator.new_local_id().await;

    (StatusCode::OK, id.to_string())
}

/// POST /initialize - Reload the ban cache from every partition
///
/// # Authentication
/// Requires the `x-admin-token` header
///
/// # Returns
/// - `200 OK`: JSON `InitializeResponseDto` with the number of banned users loaded
/// - `401 Unauthorized`: Missing or wrong admin token
/// - `500 Internal Server Error`: A partition could not be read
pub async fn initialize(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state, &headers).require()?;

    let banned_users = BanService::new(&state.shards, &state.ban_cache)
        .reload_cache()
        .await?;

    Ok((StatusCode::OK, Json(InitializeResponseDto { banned_users })))
}

/// POST /admin/user/{user_id}/ban - Ban a user
///
/// # Authentication
/// Requires the `x-admin-token` header
///
/// # Path Parameters
/// - `user_id`: ID of the user to ban
///
/// # Returns
/// - `204 No Content`: User is banned (including when already banned)
/// - `400 Bad Request`: Malformed or non-positive user ID
/// - `401 Unauthorized`: Missing or wrong admin token
/// - `404 Not Found`: No such user
pub async fn ban_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(&state, &headers).require()?;
    let user_id = valid_user_id(user_id)?;

    BanService::new(&state.shards, &state.ban_cache)
        .ban_user(&state.id_generator, user_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
