//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use crate::server::{
    service::{ban::cache::BanCache, id::IdGenerator},
    shard::ShardRouter,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `ShardRouter` keeps its partition pools behind an `Arc`
/// - `IdGenerator` and `BanCache` share their sets through `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Partition pools and the user-to-partition mapping.
    pub shards: ShardRouter,

    /// Issues row IDs and session tokens.
    pub id_generator: IdGenerator,

    /// This process's view of banned users.
    pub ban_cache: BanCache,

    /// Secret expected in the `x-admin-token` header.
    pub admin_token: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `shards` - Shard router over every partition
    /// - `id_generator` - ID generator, local or delegating to a root node
    /// - `ban_cache` - Ban cache, normally already bulk-loaded
    /// - `admin_token` - Shared secret for admin routes
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        shards: ShardRouter,
        id_generator: IdGenerator,
        ban_cache: BanCache,
        admin_token: String,
    ) -> Self {
        Self {
            shards,
            id_generator,
            ban_cache,
            admin_token,
        }
    }
}
