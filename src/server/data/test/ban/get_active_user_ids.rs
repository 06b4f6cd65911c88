use super::*;

/// Tests listing actively banned users.
///
/// Expected: only users whose ban has not been lifted
#[tokio::test]
async fn lists_only_active_bans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBan)
        .build()
        .await
        .unwrap();
    let db = test.db();
    factory::user_ban::create_ban(db, 1).await?;
    factory::user_ban::create_ban(db, 2).await?;
    factory::user_ban::create_lifted_ban(db, 3, 10).await?;

    let mut ids = BanRepository::new(db).get_active_user_ids().await?;
    ids.sort();

    assert_eq!(ids, vec![1, 2]);

    Ok(())
}

/// Tests listing bans on an empty partition.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_bans() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBan)
        .build()
        .await
        .unwrap();

    let ids = BanRepository::new(test.db()).get_active_user_ids().await?;

    assert!(ids.is_empty());

    Ok(())
}
