use super::*;
use crate::server::model::{lifecycle::Lifecycle, present::Present};
use sea_orm::EntityTrait;

/// Tests marking pending presents redeemed.
///
/// Expected: Ok(2) and both presents carry the redemption time
#[tokio::test]
async fn marks_pending_presents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_present_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::user::create_user(db).await?;
    let first = factory::user_present::create_coin_present(db, user.id, 10).await?;
    let second = factory::user_present::create_coin_present(db, user.id, 15).await?;

    let repo = PresentRepository::new(db);
    let affected = repo
        .mark_redeemed(user.id, &[first.id, second.id], 1_000)
        .await?;

    assert_eq!(affected, 2);
    assert!(repo
        .find_pending_by_ids(user.id, &[first.id, second.id])
        .await?
        .is_empty());

    let stored = entity::prelude::UserPresent::find_by_id(first.id)
        .one(db)
        .await?
        .map(Present::from_entity);
    assert_eq!(
        stored.map(|p| p.lifecycle),
        Some(Lifecycle::Inactive { at: 1_000 })
    );

    Ok(())
}

/// Tests that already redeemed presents are not touched again.
///
/// Expected: Ok(1) when one of two presents was already redeemed
#[tokio::test]
async fn skips_already_redeemed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_present_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::user::create_user(db).await?;
    let pending = factory::user_present::create_coin_present(db, user.id, 10).await?;
    let redeemed = UserPresentFactory::new(db, user.id)
        .redeemed_at(5)
        .build()
        .await?;

    let affected = PresentRepository::new(db)
        .mark_redeemed(user.id, &[pending.id, redeemed.id], 1_000)
        .await?;

    assert_eq!(affected, 1);

    Ok(())
}
