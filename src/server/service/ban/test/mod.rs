use crate::server::{
    error::AppError,
    service::{
        ban::{cache::BanCache, BanService},
        id::IdGenerator,
    },
    shard::ShardRouter,
};
use test_utils::{builder::TestBuilder, factory};

mod reload_cache;
