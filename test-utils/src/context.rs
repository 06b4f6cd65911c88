use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::error::TestError;

/// Test context containing one database connection per partition.
///
/// Each partition is an independent in-memory SQLite database, so rows written through one
/// connection are never visible through another. Partition order matches the order the
/// shard router will see them in.
pub struct TestContext {
    /// Connections to the in-memory partitions, in index order.
    pub partitions: Vec<DatabaseConnection>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no partitions
    pub fn new() -> Self {
        Self {
            partitions: Vec::new(),
        }
    }

    /// Returns the primary (first) partition.
    ///
    /// # Panics
    /// Panics if the context was created without any partition; `TestBuilder` always
    /// creates at least one.
    pub fn db(&self) -> &DatabaseConnection {
        &self.partitions[0]
    }

    /// Returns the partition at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn partition(&self, index: usize) -> &DatabaseConnection {
        &self.partitions[index]
    }

    /// Opens a fresh in-memory SQLite database and creates the given tables on it.
    ///
    /// The pool is pinned to a single connection: every SQLite in-memory connection is its
    /// own database, so a second pooled connection would see an empty schema.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute on the new partition
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the newly created partition
    /// - `Err(TestError::Database)` - Failed to connect or create one of the tables
    pub async fn add_partition(
        &mut self,
        stmts: &[TableCreateStatement],
    ) -> Result<&DatabaseConnection, TestError> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Database::connect(opt).await?;

        for stmt in stmts {
            db.execute(stmt).await?;
        }

        self.partitions.push(db);

        Ok(&self.partitions[self.partitions.len() - 1])
    }
}
