//! Session domain models and parameters.

use crate::server::model::lifecycle::Lifecycle;

/// Number of seconds a session stays valid after login.
pub const SESSION_TTL_SECONDS: i64 = 86_400;

/// An opaque session token bound to one user.
///
/// A session is active until it expires or is invalidated; both end states are recorded
/// as a soft delete.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    /// Opaque token presented in the `x-session` header.
    pub session_id: String,
    /// Absolute expiry (unix seconds).
    pub expired_at: i64,
    pub lifecycle: Lifecycle,
}

impl Session {
    /// A session is expired once the request time reaches its expiry.
    pub fn is_expired_at(&self, request_time: i64) -> bool {
        self.expired_at <= request_time
    }

    pub fn from_entity(entity: entity::user_session::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            session_id: entity.session_id,
            expired_at: entity.expired_at,
            lifecycle: Lifecycle::from_deleted_at(entity.deleted_at),
        }
    }
}

/// Parameters for inserting a new session row.
#[derive(Debug, Clone)]
pub struct CreateSessionParam {
    pub id: i64,
    pub user_id: i64,
    pub session_id: String,
    pub expired_at: i64,
}
