use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Reasons a request fails authorization.
///
/// Missing, unknown and expired sessions are kept distinct so logs and responses can tell
/// them apart, even though all three map to 401.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `x-session` header, or an empty one.
    #[error("Request has no session token")]
    MissingSession,

    /// No active session with the presented token exists in any partition.
    #[error("Session not found")]
    SessionNotFound,

    /// The session exists but its expiry is not after the request time.
    ///
    /// The session has already been soft-deleted when this error is returned.
    #[error("Session {0} has expired")]
    SessionExpired(i64),

    /// The session belongs to a different user than the one named in the path.
    #[error("Session owned by user {owner} was presented for user {claimed}")]
    SessionUserMismatch {
        /// User ID named in the request path
        claimed: i64,
        /// User ID stored on the session
        owner: i64,
    },

    /// The user is present in the ban cache.
    #[error("User {0} is banned")]
    UserBanned(i64),

    /// Admin route called without a matching `x-admin-token` header.
    #[error("Invalid admin token")]
    InvalidAdminToken,
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic.
///
/// # Returns
/// - 401 Unauthorized - Missing, unknown or expired session, bad admin token
/// - 403 Forbidden - Session/user mismatch or banned user
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingSession | Self::SessionNotFound => {
                (StatusCode::UNAUTHORIZED, "Invalid session")
            }
            Self::SessionExpired(_) => (StatusCode::UNAUTHORIZED, "Session expired"),
            Self::InvalidAdminToken => (StatusCode::UNAUTHORIZED, "Invalid admin token"),
            Self::SessionUserMismatch { .. } => (StatusCode::FORBIDDEN, "Forbidden"),
            Self::UserBanned(_) => (StatusCode::FORBIDDEN, "Forbidden"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
