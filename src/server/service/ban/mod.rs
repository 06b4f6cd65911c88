//! Ban service for banning users and refreshing the ban cache.

pub mod cache;

use tokio::task::JoinSet;

use crate::server::{
    data::{ban::BanRepository, user::UserRepository},
    error::AppError,
    service::{ban::cache::BanCache, id::IdGenerator},
    shard::ShardRouter,
};

/// Service providing business logic for bans.
pub struct BanService<'a> {
    router: &'a ShardRouter,
    cache: &'a BanCache,
}

impl<'a> BanService<'a> {
    /// Creates a new BanService instance.
    ///
    /// # Arguments
    /// - `router` - Shard router used to locate the user's partition
    /// - `cache` - Ban cache updated by this service
    pub fn new(router: &'a ShardRouter, cache: &'a BanCache) -> Self {
        Self { router, cache }
    }

    /// Bans a user.
    ///
    /// Writes the ban row to the user's partition and records the ban in this process's
    /// cache. Banning an already banned user succeeds without changing anything.
    ///
    /// # Arguments
    /// - `ids` - Generator for the ban row's ID
    /// - `user_id` - User to ban
    ///
    /// # Returns
    /// - `Ok(())` - User is banned
    /// - `Err(AppError::NotFound)` - No such user in its partition
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn ban_user(&self, ids: &IdGenerator, user_id: i64) -> Result<(), AppError> {
        let partition = self.router.route_for(user_id);

        if UserRepository::new(&partition.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let ban_id = ids.new_id().await?;
        let inserted = BanRepository::new(&partition.db)
            .upsert(ban_id, user_id)
            .await?;
        self.cache.set(user_id).await;

        tracing::info!(user_id, inserted, "User banned");

        Ok(())
    }

    /// Reloads the ban cache from the active ban rows of every partition.
    ///
    /// Partitions are read concurrently. The cache is only replaced once every partition
    /// has been read successfully.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of banned users now cached
    /// - `Err(AppError::DbErr)` - A partition could not be read; the cache is unchanged
    /// - `Err(AppError::InternalError)` - A read task panicked
    pub async fn reload_cache(&self) -> Result<usize, AppError> {
        let mut tasks = JoinSet::new();
        for partition in self.router.partitions() {
            tasks.spawn(async move {
                BanRepository::new(&partition.db)
                    .get_active_user_ids()
                    .await
            });
        }

        let mut banned = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            let user_ids = joined
                .map_err(|e| AppError::InternalError(format!("Ban load task failed: {}", e)))??;
            banned.extend(user_ids);
        }

        self.cache.bulk_load(banned).await;
        let count = self.cache.len().await;

        tracing::info!(count, partitions = self.router.len(), "Ban cache loaded");

        Ok(count)
    }
}

#[cfg(test)]
mod test;
