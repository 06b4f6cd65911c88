//! In-memory ban cache.
//!
//! Answers "is this user banned?" without touching storage. The cache is filled in bulk
//! from every partition at startup and on `/initialize`, and updated directly when this
//! process bans a user. Bans written by another process are not seen until the next bulk
//! load.

use std::{collections::HashSet, sync::Arc};

use tokio::sync::RwLock;

/// Shared set of banned user IDs.
///
/// Cloning is cheap; clones share the same set.
#[derive(Clone, Default)]
pub struct BanCache {
    banned: Arc<RwLock<HashSet<i64>>>,
}

impl BanCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether `user_id` is banned according to this process's view.
    ///
    /// # Returns
    /// - `true` - User is in the cache
    /// - `false` - User is not known to be banned
    pub async fn get(&self, user_id: i64) -> bool {
        self.banned.read().await.contains(&user_id)
    }

    /// Records a ban created by this process.
    pub async fn set(&self, user_id: i64) {
        self.banned.write().await.insert(user_id);
    }

    /// Replaces the cache contents with the given banned user IDs.
    pub async fn bulk_load(&self, user_ids: impl IntoIterator<Item = i64>) {
        let loaded: HashSet<i64> = user_ids.into_iter().collect();
        *self.banned.write().await = loaded;
    }

    /// Number of banned users currently cached.
    pub async fn len(&self) -> usize {
        self.banned.read().await.len()
    }
}
