//! Session service: login, logout and request authorization.
//!
//! Sessions live in the partition of the user they belong to at the time they were
//! created. When the partition count changes a live session can end up in a partition the
//! router no longer points at, so authorization looks in the caller's partition first and
//! then scans the others in index order.

use sea_orm::TransactionTrait;

use crate::server::{
    data::{session::SessionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        context::RequestContext,
        session::{CreateSessionParam, Session, SESSION_TTL_SECONDS},
        user::User,
    },
    service::id::IdGenerator,
    shard::{Partition, ShardRouter},
};

/// A validated session together with the partition it was found in.
#[derive(Clone)]
pub struct AuthorizedSession {
    pub session: Session,
    pub partition: Partition,
}

/// Service providing business logic for sessions.
pub struct SessionService<'a> {
    router: &'a ShardRouter,
}

impl<'a> SessionService<'a> {
    /// Creates a new SessionService instance.
    ///
    /// # Arguments
    /// - `router` - Shard router used for the fallback scan
    pub fn new(router: &'a ShardRouter) -> Self {
        Self { router }
    }

    /// Validates that `token` is a live session of the calling user.
    ///
    /// An expired session is soft-deleted in the partition it was found in before the
    /// error is returned.
    ///
    /// # Arguments
    /// - `ctx` - Request context naming the claimed user and request time
    /// - `token` - Value of the `x-session` header, if any
    ///
    /// # Returns
    /// - `Ok(AuthorizedSession)` - Session is live and owned by the caller
    /// - `Err(AuthError::MissingSession)` - No token or an empty one
    /// - `Err(AuthError::SessionNotFound)` - No live session with this token in any partition
    /// - `Err(AuthError::SessionExpired)` - Session expired at or before the request time
    /// - `Err(AuthError::SessionUserMismatch)` - Session belongs to another user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn authorize(
        &self,
        ctx: &RequestContext,
        token: Option<&str>,
    ) -> Result<AuthorizedSession, AppError> {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return Err(AuthError::MissingSession.into());
        };

        let Some(found) = self.find_by_token(ctx, token).await? else {
            return Err(AuthError::SessionNotFound.into());
        };

        if found.session.is_expired_at(ctx.request_time) {
            SessionRepository::new(&found.partition.db)
                .invalidate(found.session.id, ctx.request_time)
                .await?;
            return Err(AuthError::SessionExpired(found.session.id).into());
        }

        if found.session.user_id != ctx.user_id {
            return Err(AuthError::SessionUserMismatch {
                claimed: ctx.user_id,
                owner: found.session.user_id,
            }
            .into());
        }

        Ok(found)
    }

    /// Opens a new session for an existing user.
    ///
    /// Every other active session of the user in its partition is ended in the same
    /// transaction, and the user's last activity is set to the request time.
    ///
    /// # Arguments
    /// - `ids` - Generator for the session row ID and token
    /// - `ctx` - Request context of the user logging in
    ///
    /// # Returns
    /// - `Ok((User, Session))` - Updated user and the new session
    /// - `Err(AppError::NotFound)` - No such user in its partition
    /// - `Err(AppError::DbErr)` - Database error; nothing is changed
    pub async fn login(
        &self,
        ids: &IdGenerator,
        ctx: &RequestContext,
    ) -> Result<(User, Session), AppError> {
        let db = &ctx.partition.db;

        if UserRepository::new(db).find_by_id(ctx.user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let session_id = ids.new_id().await?;
        let token = ids.new_opaque_token();

        let txn = db.begin().await?;
        let superseded = SessionRepository::new(&txn)
            .invalidate_all_for_user(ctx.user_id, ctx.request_time)
            .await?;
        let session = SessionRepository::new(&txn)
            .create(CreateSessionParam {
                id: session_id,
                user_id: ctx.user_id,
                session_id: token,
                expired_at: ctx.request_time + SESSION_TTL_SECONDS,
            })
            .await?;
        let user = UserRepository::new(&txn)
            .update_last_activated(ctx.user_id, ctx.request_time)
            .await?;
        txn.commit().await?;

        tracing::debug!(user_id = ctx.user_id, superseded, "Session opened");

        Ok((user, session))
    }

    /// Ends an authorized session in the partition it was found in.
    pub async fn logout(&self, authorized: &AuthorizedSession, at: i64) -> Result<(), AppError> {
        SessionRepository::new(&authorized.partition.db)
            .invalidate(authorized.session.id, at)
            .await?;

        Ok(())
    }

    /// Looks up a live token in the caller's partition, then in every other partition.
    async fn find_by_token(
        &self,
        ctx: &RequestContext,
        token: &str,
    ) -> Result<Option<AuthorizedSession>, AppError> {
        let candidates = std::iter::once(ctx.partition.clone())
            .chain(self.router.others_than(ctx.partition.index));

        for partition in candidates {
            let session = SessionRepository::new(&partition.db)
                .find_active_by_token(token)
                .await?;

            if let Some(session) = session {
                if partition.index != ctx.partition.index {
                    tracing::debug!(
                        user_id = ctx.user_id,
                        primary = ctx.partition.index,
                        found = partition.index,
                        "Session found outside the primary partition"
                    );
                }
                return Ok(Some(AuthorizedSession { session, partition }));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod test;
