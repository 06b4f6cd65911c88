use super::*;

/// Tests logging out.
///
/// Expected: the session can no longer authorize requests
#[tokio::test]
async fn ends_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let router = ShardRouter::new(test.partitions.clone())?;
    factory::user::create_user_with_id(test.db(), 42).await?;
    UserSessionFactory::new(test.db(), 42)
        .session_id("bye")
        .build()
        .await?;
    let ctx = RequestContext::new(&router, 42, NOW);
    let service = SessionService::new(&router);

    let authorized = service.authorize(&ctx, Some("bye")).await?;
    service.logout(&authorized, NOW).await?;

    assert!(matches!(
        service.authorize(&ctx, Some("bye")).await,
        Err(AppError::AuthErr(AuthError::SessionNotFound))
    ));

    Ok(())
}
