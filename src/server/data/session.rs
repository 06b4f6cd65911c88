//! Session data repository.
//!
//! Sessions are never removed; invalidation and expiry both set `deleted_at`. Every update
//! here is guarded on `deleted_at IS NULL` so an already-ended session keeps its original
//! end time.

use crate::server::model::session::{CreateSessionParam, Session};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

pub struct SessionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SessionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new active session.
    ///
    /// # Returns
    /// - `Ok(Session)` - The created session
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateSessionParam) -> Result<Session, DbErr> {
        let entity = entity::user_session::ActiveModel {
            id: ActiveValue::Set(param.id),
            user_id: ActiveValue::Set(param.user_id),
            session_id: ActiveValue::Set(param.session_id),
            expired_at: ActiveValue::Set(param.expired_at),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(Session::from_entity(entity))
    }

    /// Finds a non-deleted session by its opaque token.
    ///
    /// Expiry is not checked here; callers compare `expired_at` with the request time.
    ///
    /// # Returns
    /// - `Ok(Some(Session))` - Session found
    /// - `Ok(None)` - No non-deleted session with that token in this partition
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_active_by_token(&self, token: &str) -> Result<Option<Session>, DbErr> {
        let entity = entity::prelude::UserSession::find()
            .filter(entity::user_session::Column::SessionId.eq(token))
            .filter(entity::user_session::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Session::from_entity))
    }

    /// Soft-deletes one session.
    ///
    /// # Returns
    /// - `Ok(1)` - Session ended at `at`
    /// - `Ok(0)` - Session was already ended or does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn invalidate(&self, session_id: i64, at: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::UserSession::update_many()
            .col_expr(entity::user_session::Column::DeletedAt, Expr::value(at))
            .filter(entity::user_session::Column::Id.eq(session_id))
            .filter(entity::user_session::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Soft-deletes every active session of a user.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of sessions ended
    /// - `Err(DbErr)` - Database error during update
    pub async fn invalidate_all_for_user(&self, user_id: i64, at: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::UserSession::update_many()
            .col_expr(entity::user_session::Column::DeletedAt, Expr::value(at))
            .filter(entity::user_session::Column::UserId.eq(user_id))
            .filter(entity::user_session::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
