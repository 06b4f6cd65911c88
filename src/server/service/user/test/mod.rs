use crate::server::{
    error::AppError,
    model::context::RequestContext,
    service::{id::IdGenerator, session::SessionService, user::UserService},
    shard::ShardRouter,
};
use test_utils::{builder::TestBuilder, factory};

const NOW: i64 = 1_700_000_000;

/// Tests registering a new user.
///
/// Verifies that the user lands in the partition its ID routes to with a zero balance,
/// and that the returned session authorizes requests for that user.
///
/// Expected: Ok with usable session
#[tokio::test]
async fn registers_user_in_routed_partition() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_partitions(3)
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let router = ShardRouter::new(test.partitions.clone())?;

    let (user, session) = UserService::new(&router)
        .register(&IdGenerator::local(), NOW)
        .await?;

    assert_eq!(user.isu_coin, 0);
    assert_eq!(user.registered_at, NOW);

    let ctx = RequestContext::new(&router, user.id, NOW + 1);
    let authorized = SessionService::new(&router)
        .authorize(&ctx, Some(&session.session_id))
        .await?;
    assert_eq!(authorized.partition.index, router.index_for(user.id));

    Ok(())
}

/// Tests loading a user's inventory.
///
/// Expected: Ok with the user's stacks and cards
#[tokio::test]
async fn loads_inventory() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db();
    let router = ShardRouter::new(test.partitions.clone())?;
    factory::user::create_user_with_id(db, 42).await?;
    factory::user_item::create_user_item(db, 42, 7, 3, 5).await?;

    let inventory = UserService::new(&router)
        .get_inventory(&RequestContext::new(&router, 42, NOW))
        .await?;

    assert_eq!(inventory.user.id, 42);
    assert_eq!(inventory.items.len(), 1);
    assert!(inventory.cards.is_empty());

    Ok(())
}

/// Tests loading the inventory of an unknown user.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn inventory_fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let router = ShardRouter::new(test.partitions.clone())?;

    let result = UserService::new(&router)
        .get_inventory(&RequestContext::new(&router, 404, NOW))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
