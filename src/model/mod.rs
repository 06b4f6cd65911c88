//! Data transfer objects shared by the HTTP surface.
//!
//! Every DTO serializes with camelCase field names. Domain models in `server::model`
//! convert into these at the controller boundary.

pub mod api;
pub mod item;
pub mod present;
pub mod resource;
pub mod user;
