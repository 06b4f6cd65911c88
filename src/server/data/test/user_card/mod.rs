use crate::server::{data::user_card::UserCardRepository, model::item::CreateUserCardParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests granting a card.
///
/// Expected: level 1, zero experience and the given production rate
#[tokio::test]
async fn creates_card_at_level_one() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_present_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::user::create_user(db).await?;

    let repo = UserCardRepository::new(db);
    let card = repo
        .create(CreateUserCardParam {
            id: 1,
            user_id: user.id,
            card_id: 40,
            amount_per_sec: 8,
        })
        .await?;

    assert_eq!(card.level, 1);
    assert_eq!(card.total_exp, 0);
    assert_eq!(card.amount_per_sec, 8);
    assert_eq!(repo.get_by_user(user.id).await?, vec![card]);

    Ok(())
}
