use crate::server::{data::user_item::UserItemRepository, model::item::CreateUserItemParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a stack and adding to it.
///
/// Expected: stack found by (user, item) with the overwritten amount
#[tokio::test]
async fn creates_and_updates_stack() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_present_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::user::create_user(db).await?;

    let repo = UserItemRepository::new(db);
    let created = repo
        .create(CreateUserItemParam {
            id: 1,
            user_id: user.id,
            item_id: 7,
            item_type: 3,
            amount: 3,
        })
        .await?;
    repo.set_amount(created.id, 10).await?;

    let found = repo.find_by_user_and_item(user.id, 7).await?;

    assert_eq!(found.map(|i| i.amount), Some(10));
    assert!(repo.find_by_user_and_item(user.id, 8).await?.is_none());

    Ok(())
}

/// Tests listing a user's stacks.
///
/// Expected: only the user's stacks, ordered by item ID
#[tokio::test]
async fn lists_user_stacks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_present_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::user_item::create_user_item(db, user.id, 9, 4, 1).await?;
    factory::user_item::create_user_item(db, user.id, 7, 3, 2).await?;
    factory::user_item::create_user_item(db, other.id, 7, 3, 5).await?;

    let items = UserItemRepository::new(db).get_by_user(user.id).await?;

    let item_ids: Vec<i64> = items.iter().map(|i| i.item_id).collect();
    assert_eq!(item_ids, vec![7, 9]);

    Ok(())
}
