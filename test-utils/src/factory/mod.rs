//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating rows with sensible defaults,
//! reducing boilerplate in tests. Each factory inserts into the connection it is given,
//! so tests decide which partition a row lands in.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let session = factory::user_session::create_session(&db, user.id).await?;
//!     let present = factory::user_present::create_coin_present(&db, user.id, 10).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user rows
//! - `user_session` - Create session rows
//! - `user_ban` - Create ban rows
//! - `user_present` - Create pending or redeemed presents
//! - `user_item` - Seed material inventory
//! - `item_master` - Seed the item catalogue
//! - `helpers` - Convenience methods for creating rows with dependencies

pub mod helpers;
pub mod item_master;
pub mod user;
pub mod user_ban;
pub mod user_item;
pub mod user_present;
pub mod user_session;

// Re-export commonly used factory functions for concise usage
pub use item_master::{create_card_master, create_material_master};
pub use user::{create_user, create_user_with_id};
pub use user_ban::create_ban;
pub use user_item::create_user_item;
pub use user_present::create_coin_present;
pub use user_session::create_session;
