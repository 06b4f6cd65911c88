//! Domain models for the application.
//!
//! Models here sit between the database entities in the `entity` crate and the DTOs in
//! `crate::model`. Repositories convert entities into these types at the data boundary and
//! controllers convert them into DTOs at the HTTP boundary.

pub mod context;
pub mod item;
pub mod lifecycle;
pub mod present;
pub mod session;
pub mod user;
