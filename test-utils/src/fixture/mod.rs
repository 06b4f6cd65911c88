//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory rows for use in unit
//! tests and as default values for factories. Unlike factories, fixtures do NOT insert
//! data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let user = fixture::user::entity();
//!
//! // Create with custom fields
//! let rich = fixture::user::entity_builder()
//!     .isu_coin(1_000)
//!     .build();
//! ```

pub mod item_master;
pub mod user;
pub mod user_present;

pub use user::{entity as user_entity, entity_builder as user_entity_builder};
pub use user_present::{
    entity as user_present_entity, entity_builder as user_present_entity_builder,
};
