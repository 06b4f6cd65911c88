use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Tests finding an existing user.
///
/// Expected: Ok(Some) with the stored balance
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
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

    let user = UserRepository::new(db).find_by_id(42).await?;

    assert_eq!(user.map(|u| u.isu_coin), Some(100));

    Ok(())
}

/// Tests that soft-deleted users are not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_soft_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    factory::user::create_user_with_id(db, 42).await?;
    entity::user::ActiveModel {
        id: ActiveValue::Unchanged(42),
        deleted_at: ActiveValue::Set(Some(5)),
        ..Default::default()
    }
    .update(db)
    .await?;

    let user = UserRepository::new(db).find_by_id(42).await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests that a user stored in one partition is invisible from another.
///
/// Expected: Ok(None) when querying the second partition
#[tokio::test]
async fn does_not_see_other_partitions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_partitions(2)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    factory::user::create_user_with_id(test.partition(0), 42).await?;

    let user = UserRepository::new(test.partition(1)).find_by_id(42).await?;

    assert!(user.is_none());

    Ok(())
}
