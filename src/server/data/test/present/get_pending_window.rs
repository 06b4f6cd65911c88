use super::*;

/// Tests ordering of the pending present listing.
///
/// Expected: newest first, ties broken by ascending ID, redeemed presents excluded
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_present_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::user::create_user(db).await?;

    UserPresentFactory::new(db, user.id).id(1).sent_at(100).build().await?;
    UserPresentFactory::new(db, user.id).id(2).sent_at(300).build().await?;
    UserPresentFactory::new(db, user.id).id(3).sent_at(300).build().await?;
    UserPresentFactory::new(db, user.id)
        .id(4)
        .sent_at(400)
        .redeemed_at(401)
        .build()
        .await?;

    let presents = PresentRepository::new(db)
        .get_pending_window(user.id, 0, 10)
        .await?;

    let ids: Vec<i64> = presents.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);

    Ok(())
}

/// Tests windowing with offset and limit.
///
/// Expected: second window of size 2 holds the third present only
#[tokio::test]
async fn applies_offset_and_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_present_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::user::create_user(db).await?;

    for (id, sent_at) in [(1, 30), (2, 20), (3, 10)] {
        UserPresentFactory::new(db, user.id)
            .id(id)
            .sent_at(sent_at)
            .build()
            .await?;
    }

    let presents = PresentRepository::new(db)
        .get_pending_window(user.id, 2, 2)
        .await?;

    assert_eq!(presents.len(), 1);
    assert_eq!(presents[0].id, 3);

    Ok(())
}
