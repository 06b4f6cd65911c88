use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        item::ListItemResponseDto,
        resource::UpdatedResourcesDto,
        user::{CreateUserResponseDto, LoginRequestDto, LoginResponseDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            context::{request_context, request_time, ApiPath},
        },
        service::{session::SessionService, user::UserService},
        state::AppState,
    },
};

/// POST /user - Register a new user
///
/// Creates the user in the partition its new ID routes to and opens their first session.
///
/// # Returns
/// - `201 Created`: JSON `CreateUserResponseDto` with the user ID and session token
/// - `500 Internal Server Error`: ID generation or database error
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let now = request_time(&headers);

    let (user, session) = UserService::new(&state.shards)
        .register(&state.id_generator, now)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponseDto {
            user_id: user.id,
            session_id: session.session_id,
            updated_resources: UpdatedResourcesDto {
                now,
                user: Some(user.into_dto()),
                ..Default::default()
            },
        }),
    ))
}

/// POST /login - Open a session for an existing user
///
/// Ends any session the user already has.
///
/// # Returns
/// - `200 OK`: JSON `LoginResponseDto` with the new session token
/// - `400 Bad Request`: Non-positive user ID
/// - `403 Forbidden`: User is banned
/// - `404 Not Found`: No such user
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LoginRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = request_context(&state.shards, payload.user_id, &headers)?;
    AuthGuard::new(&state, &headers)
        .require_not_banned(&ctx)
        .await?;

    let (user, session) = SessionService::new(&state.shards)
        .login(&state.id_generator, &ctx)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            session_id: session.session_id,
            updated_resources: UpdatedResourcesDto {
                now: ctx.request_time,
                user: Some(user.into_dto()),
                ..Default::default()
            },
        }),
    ))
}

/// DELETE /user/{user_id}/logout - End the current session
///
/// # Authentication
/// Requires a live session of `user_id`
///
/// # Returns
/// - `204 No Content`: Session ended
/// - `400 Bad Request`: Malformed or non-positive user ID
/// - `401 Unauthorized`: Missing, unknown or expired session
/// - `403 Forbidden`: Banned user or session of another user
pub async fn logout(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let ctx = request_context(&state.shards, user_id, &headers)?;
    let authorized = AuthGuard::new(&state, &headers).require(&ctx).await?;

    SessionService::new(&state.shards)
        .logout(&authorized, ctx.request_time)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /user/{user_id}/item - List the user's materials and cards
///
/// # Authentication
/// Requires a live session of `user_id`
///
/// # Returns
/// - `200 OK`: JSON `ListItemResponseDto`
/// - `400 Bad Request`: Malformed or non-positive user ID
/// - `404 Not Found`: No such user
pub async fn list_items(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let ctx = request_context(&state.shards, user_id, &headers)?;
    AuthGuard::new(&state, &headers).require(&ctx).await?;

    let inventory = UserService::new(&state.shards).get_inventory(&ctx).await?;

    Ok((
        StatusCode::OK,
        Json(ListItemResponseDto {
            user: inventory.user.into_dto(),
            items: inventory.items.into_iter().map(|i| i.into_dto()).collect(),
            cards: inventory.cards.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}
