//! SeaORM entities for a single storage partition.
//!
//! Every partition carries the same schema; which partition a user's rows live
//! in is decided by the server's shard router, not by anything in these models.

pub mod prelude;

pub mod item_master;
pub mod user;
pub mod user_ban;
pub mod user_card;
pub mod user_item;
pub mod user_present;
pub mod user_session;
