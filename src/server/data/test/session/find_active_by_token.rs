use super::*;

/// Tests that invalidated sessions are not returned.
///
/// Expected: Ok(None) for a soft-deleted session
#[tokio::test]
async fn ignores_deleted_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::user::create_user(db).await?;
    factory::user_session::UserSessionFactory::new(db, user.id)
        .session_id("gone")
        .deleted_at(10)
        .build()
        .await?;

    let session = SessionRepository::new(db).find_active_by_token("gone").await?;

    assert!(session.is_none());

    Ok(())
}

/// Tests that expired but not yet deleted sessions are still returned.
///
/// Expiry is decided by the caller against the request time.
///
/// Expected: Ok(Some) for a session whose expiry is in the past
#[tokio::test]
async fn returns_expired_but_undeleted_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::user::create_user(db).await?;
    factory::user_session::UserSessionFactory::new(db, user.id)
        .session_id("stale")
        .expired_at(1)
        .build()
        .await?;

    let session = SessionRepository::new(db).find_active_by_token("stale").await?;

    assert_eq!(session.map(|s| s.expired_at), Some(1));

    Ok(())
}

/// Tests looking up an unknown token.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();

    let session = SessionRepository::new(test.db())
        .find_active_by_token("nope")
        .await?;

    assert!(session.is_none());

    Ok(())
}
