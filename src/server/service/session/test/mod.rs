use crate::server::{
    error::{auth::AuthError, AppError},
    model::context::RequestContext,
    service::{id::IdGenerator, session::SessionService},
    shard::ShardRouter,
};
use test_utils::{builder::TestBuilder, factory, factory::user_session::UserSessionFactory};

mod logout;

/// Request time used throughout the session tests.
const NOW: i64 = 1_700_000_000;
