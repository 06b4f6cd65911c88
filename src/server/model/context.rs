//! Per-request context threaded through services.

use crate::server::shard::{Partition, ShardRouter};

/// The caller, the partition that owns them and the time the request is processed at.
///
/// The partition is resolved once when the context is built and reused for every storage
/// access made on behalf of the request.
#[derive(Clone)]
pub struct RequestContext {
    pub user_id: i64,
    pub partition: Partition,
    /// Request time in unix seconds.
    pub request_time: i64,
}

impl RequestContext {
    /// Builds a context for `user_id`, routing it through `router`.
    pub fn new(router: &ShardRouter, user_id: i64, request_time: i64) -> Self {
        Self {
            user_id,
            partition: router.route_for(user_id),
            request_time,
        }
    }
}
