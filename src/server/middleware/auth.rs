use axum::http::HeaderMap;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::context::session_token,
    model::context::RequestContext,
    service::session::{AuthorizedSession, SessionService},
    state::AppState,
};

/// Header carrying the admin shared secret.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Guards user routes: ban check first, then the session.
pub struct AuthGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    /// Rejects the request if the caller is banned.
    pub async fn require_not_banned(&self, ctx: &RequestContext) -> Result<(), AppError> {
        if self.state.ban_cache.get(ctx.user_id).await {
            return Err(AuthError::UserBanned(ctx.user_id).into());
        }

        Ok(())
    }

    /// Requires an unbanned caller presenting a live session of their own.
    pub async fn require(&self, ctx: &RequestContext) -> Result<AuthorizedSession, AppError> {
        self.require_not_banned(ctx).await?;

        SessionService::new(&self.state.shards)
            .authorize(ctx, session_token(self.headers))
            .await
    }
}

/// Guards admin routes with the shared admin token.
pub struct AdminGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> AdminGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    pub fn require(&self) -> Result<(), AppError> {
        let presented = self
            .headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok());

        match presented {
            Some(token) if token == self.state.admin_token => Ok(()),
            _ => Err(AuthError::InvalidAdminToken.into()),
        }
    }
}
