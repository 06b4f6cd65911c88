//! Quest Server Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the quest
//! server. This crate offers a builder pattern for creating test contexts backed by one or
//! more in-memory SQLite partitions with customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing one connection per partition
//! - **TestError**: Error types that can occur during test setup
//! - **factory** / **fixture**: Row builders with and without database insertion
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_partitions(3)
//!         .with_table(User)
//!         .build()
//!         .await?;
//!
//!     let db = test.db();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
