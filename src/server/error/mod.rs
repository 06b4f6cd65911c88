//! Errors returned by services and handlers.
//!
//! Repositories return `sea_orm::DbErr`, services return `AppError`, and handlers hand the
//! first error they see to axum. Client errors carry their message in the response body;
//! server errors are logged and answered with a generic body.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Error of any request or startup step.
///
/// `AuthError` picks its own 401/403 status. `NotFound`, `BadRequest` and `Conflict`
/// map to 404, 400 and 409; every other variant is a 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid or missing environment at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Session, ban or admin-token rejection.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Partition query or transaction failure.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// The ID root node could not be reached or answered with an error status.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unknown user or catalogue item.
    #[error("{0}")]
    NotFound(String),

    /// Bad page index or unknown reward kind.
    #[error("{0}")]
    BadRequest(String),

    /// The resource changed underneath the request, e.g. a present was redeemed by a
    /// concurrent call.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Task failure or malformed root-node response. Logged, never sent to the client.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs the wrapped error and answers 500 with a generic body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
