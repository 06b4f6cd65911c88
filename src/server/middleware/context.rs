//! Extraction of per-request attributes from headers.

use axum::{
    extract::{FromRequestParts, Path},
    http::{request::Parts, HeaderMap},
};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::server::{error::AppError, model::context::RequestContext, shard::ShardRouter};

/// Header carrying the session token.
pub const SESSION_HEADER: &str = "x-session";

/// Header carrying the request time in RFC 1123 form.
pub const REQUEST_TIME_HEADER: &str = "x-isu-date";

/// Reads the request time from `x-isu-date`, falling back to the wall clock.
///
/// # Returns
/// - `i64` - Request time in unix seconds
pub fn request_time(headers: &HeaderMap) -> i64 {
    headers
        .get(REQUEST_TIME_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| DateTime::parse_from_rfc2822(value).ok())
        .map(|time| time.timestamp())
        .unwrap_or_else(|| Utc::now().timestamp())
}

/// Reads the session token from `x-session`.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Builds the request context for `user_id` from the request headers.
///
/// # Returns
/// - `Ok(RequestContext)` - Context routed to the user's partition
/// - `Err(AppError::BadRequest)` - `user_id` is not a positive integer
pub fn request_context(
    router: &ShardRouter,
    user_id: i64,
    headers: &HeaderMap,
) -> Result<RequestContext, AppError> {
    let user_id = valid_user_id(user_id)?;

    Ok(RequestContext::new(router, user_id, request_time(headers)))
}

/// Checks that a caller-supplied user ID is a positive integer.
pub fn valid_user_id(user_id: i64) -> Result<i64, AppError> {
    if user_id <= 0 {
        return Err(AppError::BadRequest(format!("Invalid user ID {}", user_id)));
    }

    Ok(user_id)
}

/// Path extractor answering malformed segments with a JSON 400 instead of axum's
/// plain-text rejection.
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
    }
}
