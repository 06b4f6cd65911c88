//! Soft-delete state shared by sessions, presents, bans and users.

/// Whether a row is still live or has been soft-deleted.
///
/// Stored as a nullable `deleted_at` column. Once a row becomes `Inactive` nothing moves it
/// back to `Active`; `deactivate` on an inactive value keeps the original timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Live row; `deleted_at` is NULL.
    Active,
    /// Soft-deleted at `at` (unix seconds).
    Inactive { at: i64 },
}

impl Lifecycle {
    /// Decodes the stored `deleted_at` column.
    ///
    /// # Arguments
    /// - `deleted_at` - Soft-delete timestamp, `None` for a live row
    ///
    /// # Returns
    /// - `Lifecycle` - `Active` for `None`, otherwise `Inactive` at that time
    pub fn from_deleted_at(deleted_at: Option<i64>) -> Self {
        match deleted_at {
            Some(at) => Self::Inactive { at },
            None => Self::Active,
        }
    }

    /// Encodes the state back into the `deleted_at` column.
    ///
    /// # Returns
    /// - `Some(at)` - Row was soft-deleted at `at`
    /// - `None` - Row is live
    pub fn deleted_at(&self) -> Option<i64> {
        match self {
            Self::Active => None,
            Self::Inactive { at } => Some(*at),
        }
    }

    /// Returns `true` while the row has not been soft-deleted.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns the inactive state reached by soft-deleting at `at`.
    ///
    /// # Returns
    /// - `Inactive { at }` - When called on `Active`
    /// - `self` - When already inactive, keeping the first timestamp
    pub fn deactivate(self, at: i64) -> Self {
        match self {
            Self::Active => Self::Inactive { at },
            inactive => inactive,
        }
    }
}
