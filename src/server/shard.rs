//! Deterministic mapping from user IDs to storage partitions.
//!
//! Every user's rows live in the partition `user_id mod N`, where N is the number of
//! configured partitions. The mapping is recomputed from the current N on every request,
//! so rows written under an older N may sit in a partition the router no longer points
//! at; the session authorizer compensates for that by scanning the other partitions.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::error::config::ConfigError;

/// A partition connection pool together with its position in the router.
#[derive(Clone)]
pub struct Partition {
    pub index: usize,
    pub db: DatabaseConnection,
}

/// Routes user IDs onto a fixed, ordered set of partition pools.
///
/// Cloning is cheap; all clones share the same pools.
#[derive(Clone)]
pub struct ShardRouter {
    partitions: Arc<Vec<DatabaseConnection>>,
}

impl ShardRouter {
    /// Creates a router over the given pools, in index order.
    ///
    /// # Returns
    /// - `Ok(ShardRouter)` - Router over at least one partition
    /// - `Err(ConfigError::InvalidEnvVar)` - No partitions were supplied
    pub fn new(partitions: Vec<DatabaseConnection>) -> Result<Self, ConfigError> {
        if partitions.is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                name: "DATABASE_URLS".to_string(),
                reason: "shard router requires at least one partition".to_string(),
            });
        }

        Ok(Self {
            partitions: Arc::new(partitions),
        })
    }

    /// Number of partitions (N).
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    /// Index of the partition owning `user_id`.
    pub fn index_for(&self, user_id: i64) -> usize {
        user_id.rem_euclid(self.partitions.len() as i64) as usize
    }

    /// Resolves the partition owning `user_id`.
    pub fn route_for(&self, user_id: i64) -> Partition {
        self.partition(self.index_for(user_id))
    }

    /// Every partition, in index order.
    pub fn partitions(&self) -> Vec<Partition> {
        (0..self.partitions.len())
            .map(|index| self.partition(index))
            .collect()
    }

    /// Every partition except `index`, in index order.
    pub fn others_than(&self, index: usize) -> Vec<Partition> {
        (0..self.partitions.len())
            .filter(|&i| i != index)
            .map(|i| self.partition(i))
            .collect()
    }

    fn partition(&self, index: usize) -> Partition {
        Partition {
            index,
            db: self.partitions[index].clone(),
        }
    }
}
