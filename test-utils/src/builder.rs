use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with one or more
/// in-memory SQLite partitions. Every partition receives the same set of tables, mirroring
/// production where each shard carries an identical schema.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, UserSession};
///
/// let test = TestBuilder::new()
///     .with_partitions(4)
///     .with_table(User)
///     .with_table(UserSession)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Number of independent in-memory databases to create.
    partitions: usize,

    /// Vector of CREATE TABLE statements to execute on every partition.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with a single partition and no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with one partition and empty table configuration
    pub fn new() -> Self {
        Self {
            partitions: 1,
            tables: Vec::new(),
        }
    }

    /// Sets how many partitions the test context will hold.
    ///
    /// Values below one are clamped to one so a context always has a primary database.
    ///
    /// # Arguments
    /// - `count` - Number of in-memory partitions to create
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_partitions(mut self, count: usize) -> Self {
        self.partitions = count.max(1);
        self
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created on every partition when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and session tables required by the authorizer.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_session_tables(self) -> Self {
        self.with_table(User).with_table(UserSession)
    }

    /// Adds every table touched by present redemption.
    ///
    /// This convenience method adds the following tables:
    /// - User
    /// - ItemMaster
    /// - UserPresent
    /// - UserItem
    /// - UserCard
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_present_tables(self) -> Self {
        self.with_table(User)
            .with_table(ItemMaster)
            .with_table(UserPresent)
            .with_table(UserItem)
            .with_table(UserCard)
    }

    /// Adds the complete partition schema.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_present_tables()
            .with_table(UserSession)
            .with_table(UserBan)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates the configured number of in-memory SQLite databases and executes all
    /// CREATE TABLE statements on each of them.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with partitions ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        for _ in 0..self.partitions {
            setup.add_partition(&self.tables).await?;
        }

        Ok(setup)
    }
}
