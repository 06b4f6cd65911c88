//! Session factory for creating test session rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default session lifetime used by the factory, matching the login flow.
pub const DEFAULT_SESSION_TTL: i64 = 86_400;

/// Factory for creating test sessions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let session = UserSessionFactory::new(&db, user.id)
///     .session_id("token")
///     .expired_at(now + 60)
///     .build()
///     .await?;
/// ```
pub struct UserSessionFactory<'a> {
    db: &'a DatabaseConnection,
    id: i64,
    user_id: i64,
    session_id: String,
    expired_at: i64,
    deleted_at: Option<i64>,
}

impl<'a> UserSessionFactory<'a> {
    /// Creates a new UserSessionFactory with default values.
    ///
    /// Defaults:
    /// - session_id: `"session-{id}"`
    /// - expired_at: far in the future, so the session never expires during a test
    /// - deleted_at: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i64) -> Self {
        let id = next_id();
        Self {
            db,
            id,
            user_id,
            session_id: format!("session-{}", id),
            expired_at: i64::MAX / 2,
            deleted_at: None,
        }
    }

    /// Sets the opaque token.
    pub fn session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Sets the absolute expiry (unix seconds).
    pub fn expired_at(mut self, expired_at: i64) -> Self {
        self.expired_at = expired_at;
        self
    }

    /// Marks the session as already invalidated at `at`.
    pub fn deleted_at(mut self, at: i64) -> Self {
        self.deleted_at = Some(at);
        self
    }

    /// Builds and inserts the session row.
    pub async fn build(self) -> Result<entity::user_session::Model, DbErr> {
        entity::user_session::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            session_id: ActiveValue::Set(self.session_id),
            expired_at: ActiveValue::Set(self.expired_at),
            deleted_at: ActiveValue::Set(self.deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-expiring active session for `user_id`.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entity::user_session::Model, DbErr> {
    UserSessionFactory::new(db, user_id).build().await
}
