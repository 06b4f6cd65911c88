//! Business logic layer.
//!
//! Services orchestrate repositories across partitions and transactions. They take the
//! shared components they need (shard router, ID generator, ban cache) by reference and
//! return domain models; controllers convert those into DTOs.

pub mod ban;
pub mod id;
pub mod present;
pub mod session;
pub mod user;
