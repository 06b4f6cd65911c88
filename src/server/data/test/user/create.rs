use super::*;
use crate::server::model::lifecycle::Lifecycle;

/// Tests registering a new user.
///
/// Verifies that the user starts with a zero balance and every timestamp set to the
/// registration time.
///
/// Expected: Ok with zeroed balance and matching timestamps
#[tokio::test]
async fn creates_user_with_zero_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            id: 100_000_000_042,
            registered_at: 1_700_000_000,
        })
        .await?;

    assert_eq!(user.id, 100_000_000_042);
    assert_eq!(user.isu_coin, 0);
    assert_eq!(user.registered_at, 1_700_000_000);
    assert_eq!(user.last_activated_at, 1_700_000_000);
    assert_eq!(user.lifecycle, Lifecycle::Active);

    Ok(())
}

/// Tests that registering the same ID twice fails.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn fails_for_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    factory::user::create_user_with_id(db, 7).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            id: 7,
            registered_at: 1,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
