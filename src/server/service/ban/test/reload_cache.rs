use super::*;

/// Tests loading bans from every partition.
///
/// Expected: union of active bans across partitions, lifted bans excluded
#[tokio::test]
async fn loads_bans_from_all_partitions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_partitions(3)
        .with_all_tables()
        .build()
        .await
        .unwrap();
    factory::user_ban::create_ban(test.partition(0), 3).await?;
    factory::user_ban::create_ban(test.partition(2), 5).await?;
    factory::user_ban::create_lifted_ban(test.partition(1), 4, 10).await?;
    let router = ShardRouter::new(test.partitions.clone())?;
    let cache = BanCache::new();

    let count = BanService::new(&router, &cache).reload_cache().await?;

    assert_eq!(count, 2);
    assert!(cache.get(3).await);
    assert!(cache.get(5).await);
    assert!(!cache.get(4).await);

    Ok(())
}

/// Tests that a ban made by another process is invisible until reload.
///
/// Two caches stand in for two processes sharing the same partitions. A ban made through
/// the first is visible to it immediately, while the second only learns of it once it
/// reloads.
///
/// Expected: second cache stale before reload, up to date after
#[tokio::test]
async fn other_process_sees_ban_after_reload() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    factory::user::create_user_with_id(test.db(), 42).await?;
    let router = ShardRouter::new(test.partitions.clone())?;
    let first_process = BanCache::new();
    let second_process = BanCache::new();
    BanService::new(&router, &second_process)
        .reload_cache()
        .await?;

    BanService::new(&router, &first_process)
        .ban_user(&IdGenerator::local(), 42)
        .await?;

    assert!(first_process.get(42).await);
    assert!(!second_process.get(42).await);

    BanService::new(&router, &second_process)
        .reload_cache()
        .await?;

    assert!(second_process.get(42).await);

    Ok(())
}
