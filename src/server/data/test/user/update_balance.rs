use super::*;
use sea_orm::TransactionTrait;

/// Tests overwriting the balance.
///
/// Expected: Ok with new balance persisted
#[tokio::test]
async fn updates_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    factory::user::UserFactory::new(db)
        .id(42)
        .isu_coin(100)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo.update_balance(42, 125).await?;

    assert_eq!(updated.isu_coin, 125);
    assert_eq!(repo.find_by_id(42).await?.map(|u| u.isu_coin), Some(125));

    Ok(())
}

/// Tests that a balance written inside a rolled back transaction is discarded.
///
/// Expected: Ok with the original balance after rollback
#[tokio::test]
async fn discards_balance_on_rollback() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    factory::user::UserFactory::new(db)
        .id(42)
        .isu_coin(100)
        .build()
        .await?;

    let txn = db.begin().await?;
    UserRepository::new(&txn).update_balance(42, 999).await?;
    txn.rollback().await?;

    let user = UserRepository::new(db).find_by_id(42).await?;

    assert_eq!(user.map(|u| u.isu_coin), Some(100));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    let result = UserRepository::new(test.db()).update_balance(404, 1).await;

    assert!(result.is_err());

    Ok(())
}
