use super::*;

/// Tests creating a session and finding it again by token.
///
/// Expected: Ok with the session retrievable by its opaque token
#[tokio::test]
async fn creates_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::user::create_user(db).await?;

    let repo = SessionRepository::new(db);
    let session = repo
        .create(CreateSessionParam {
            id: 1,
            user_id: user.id,
            session_id: "token-1".to_string(),
            expired_at: 86_400,
        })
        .await?;

    assert!(session.lifecycle.is_active());
    assert_eq!(
        repo.find_active_by_token("token-1").await?,
        Some(session)
    );

    Ok(())
}
