use super::*;

/// Tests ending every active session of one user.
///
/// Verifies that only the target user's active sessions are touched.
///
/// Expected: Ok(2) and the other user's session still active
#[tokio::test]
async fn invalidates_only_target_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::user_session::create_session(db, user.id).await?;
    factory::user_session::create_session(db, user.id).await?;
    factory::user_session::UserSessionFactory::new(db, user.id)
        .deleted_at(1)
        .build()
        .await?;
    let kept = factory::user_session::create_session(db, other.id).await?;

    let repo = SessionRepository::new(db);
    let affected = repo.invalidate_all_for_user(user.id, 99).await?;

    assert_eq!(affected, 2);
    assert!(repo.find_active_by_token(&kept.session_id).await?.is_some());

    Ok(())
}
