//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait` so the same queries run against a
//! partition pool or inside a transaction opened on one.

pub mod ban;
pub mod item_master;
pub mod present;
pub mod session;
pub mod user;
pub mod user_card;
pub mod user_item;

#[cfg(test)]
mod test;
