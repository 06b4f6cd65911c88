//! HTTP request handlers.
//!
//! Controllers build the request context, run the guards a route needs, call into the
//! service layer and convert the resulting domain models into DTOs.

pub mod admin;
pub mod present;
pub mod system;
pub mod user;

#[cfg(test)]
mod test;
