use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests banning a user.
///
/// Expected: Ok(true) and one ban row
#[tokio::test]
async fn inserts_ban() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBan)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let inserted = BanRepository::new(db).upsert(1, 42).await?;

    assert!(inserted);
    assert_eq!(entity::prelude::UserBan::find().count(db).await?, 1);

    Ok(())
}

/// Tests that banning the same user twice is a no-op.
///
/// Expected: Ok(false) on the second call and still one ban row
#[tokio::test]
async fn rebanning_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBan)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = BanRepository::new(db);
    repo.upsert(1, 42).await?;
    let inserted = repo.upsert(2, 42).await?;

    assert!(!inserted);
    assert_eq!(entity::prelude::UserBan::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a pre-existing ban row is respected.
///
/// Expected: Ok(false)
#[tokio::test]
async fn respects_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBan)
        .build()
        .await
        .unwrap();
    let db = test.db();
    factory::user_ban::create_ban(db, 42).await?;

    let inserted = BanRepository::new(db).upsert(1, 42).await?;

    assert!(!inserted);

    Ok(())
}

/// Tests banning a user whose earlier ban was lifted.
///
/// Expected: Ok(true) with the same single row active again
#[tokio::test]
async fn reactivates_lifted_ban() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBan)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let lifted = factory::user_ban::create_lifted_ban(db, 42, 10).await?;

    let inserted = BanRepository::new(db).upsert(1, 42).await?;

    assert!(inserted);
    let rows = entity::prelude::UserBan::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, lifted.id);
    assert_eq!(rows[0].deleted_at, None);
    assert_eq!(BanRepository::new(db).get_active_user_ids().await?, vec![42]);

    Ok(())
}
