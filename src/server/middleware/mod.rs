//! Request guards run by controllers before any business logic.

pub mod auth;
pub mod context;
