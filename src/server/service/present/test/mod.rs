use crate::server::{
    error::AppError,
    model::{context::RequestContext, lifecycle::Lifecycle},
    service::{id::IdGenerator, present::PresentService},
    shard::ShardRouter,
};
use test_utils::{
    builder::TestBuilder, context::TestContext, factory,
    factory::user_present::UserPresentFactory,
};

mod list;

const NOW: i64 = 1_700_000_000;

/// Builds a single-partition context with every table and user 42 holding `balance` coins.
async fn setup_user(balance: i64) -> (TestContext, ShardRouter) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    factory::user::UserFactory::new(test.db())
        .id(42)
        .isu_coin(balance)
        .build()
        .await
        .unwrap();
    let router = ShardRouter::new(test.partitions.clone()).unwrap();
    (test, router)
}
