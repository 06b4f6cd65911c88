use super::*;

/// Tests that only the user's own pending presents are returned.
///
/// Verifies that redeemed presents, presents addressed to another user and unknown IDs are
/// all filtered out.
///
/// Expected: Ok with exactly the one eligible present
#[tokio::test]
async fn filters_to_pending_presents_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_present_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let pending = factory::user_present::create_coin_present(db, user.id, 10).await?;
    let redeemed = UserPresentFactory::new(db, user.id)
        .redeemed_at(5)
        .build()
        .await?;
    let foreign = factory::user_present::create_coin_present(db, other.id, 10).await?;

    let presents = PresentRepository::new(db)
        .find_pending_by_ids(user.id, &[pending.id, redeemed.id, foreign.id, 999_999])
        .await?;

    assert_eq!(presents.len(), 1);
    assert_eq!(presents[0].id, pending.id);

    Ok(())
}

/// Tests fetching with an empty ID list.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_empty_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_present_tables().build().await.unwrap();

    let presents = PresentRepository::new(test.db())
        .find_pending_by_ids(1, &[])
        .await?;

    assert!(presents.is_empty());

    Ok(())
}
