use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        present::{ListPresentResponseDto, ReceivePresentRequestDto, ReceivePresentResponseDto},
        resource::UpdatedResourcesDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            context::{request_context, ApiPath},
        },
        service::present::PresentService,
        state::AppState,
    },
};

/// GET /user/{user_id}/present/index/{n} - List pending presents
///
/// # Authentication
/// Requires a live session of `user_id`
///
/// # Path Parameters
/// - `user_id`: Caller's user ID
/// - `n`: One-based page index, 100 presents per page
///
/// # Returns
/// - `200 OK`: JSON `ListPresentResponseDto`
/// - `400 Bad Request`: Page index zero or malformed path
pub async fn list_presents(
    State(state): State<AppState>,
    ApiPath((user_id, page)): ApiPath<(i64, u64)>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let ctx = request_context(&state.shards, user_id, &headers)?;
    AuthGuard::new(&state, &headers).require(&ctx).await?;

    let page = PresentService::new(&state.id_generator)
        .list(&ctx, page)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ListPresentResponseDto {
            presents: page.presents.into_iter().map(|p| p.into_dto()).collect(),
            is_next: page.is_next,
        }),
    ))
}

/// POST /user/{user_id}/present/receive - Redeem presents
///
/// Presents that are unknown, not the caller's or already redeemed are skipped. When the
/// batch mixes reward kinds, a failure in one kind does not undo the others; the response
/// reports the first failure.
///
/// # Authentication
/// Requires a live session of `user_id`
///
/// # Returns
/// - `200 OK`: JSON `ReceivePresentResponseDto` with the changed resources
/// - `400 Bad Request`: Unknown reward kind or malformed user ID
/// - `404 Not Found`: User or referenced item missing
/// - `409 Conflict`: Presents redeemed concurrently
pub async fn receive_presents(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
    headers: HeaderMap,
    Json(payload): Json<ReceivePresentRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = request_context(&state.shards, user_id, &headers)?;
    AuthGuard::new(&state, &headers).require(&ctx).await?;

    let redemption = PresentService::new(&state.id_generator)
        .redeem(&ctx, &payload.present_ids)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ReceivePresentResponseDto {
            updated_resources: UpdatedResourcesDto {
                now: ctx.request_time,
                user: redemption.user.map(|u| u.into_dto()),
                user_cards: Some(redemption.cards.into_iter().map(|c| c.into_dto()).collect()),
                user_items: Some(redemption.items.into_iter().map(|i| i.into_dto()).collect()),
                user_presents: Some(
                    redemption
                        .presents
                        .into_iter()
                        .map(|p| p.into_dto())
                        .collect(),
                ),
            },
        }),
    ))
}
