use super::*;

/// Tests paging through more than one page of presents.
///
/// Expected: 100 presents with is_next on page 1, the remaining one without on page 2
#[tokio::test]
async fn pages_pending_presents() -> Result<(), AppError> {
    let (test, router) = setup_user(0).await;
    for sent_at in 0..101 {
        UserPresentFactory::new(test.db(), 42)
            .sent_at(sent_at)
            .build()
            .await?;
    }
    let ids = IdGenerator::local();
    let ctx = RequestContext::new(&router, 42, NOW);
    let service = PresentService::new(&ids);

    let first = service.list(&ctx, 1).await?;
    let second = service.list(&ctx, 2).await?;

    assert_eq!(first.presents.len(), 100);
    assert!(first.is_next);
    assert_eq!(first.presents[0].sent_at, 100);
    assert_eq!(second.presents.len(), 1);
    assert!(!second.is_next);
    assert_eq!(second.presents[0].sent_at, 0);

    Ok(())
}

/// Tests requesting page zero.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_page_zero() -> Result<(), AppError> {
    let (_test, router) = setup_user(0).await;
    let ids = IdGenerator::local();

    let result = PresentService::new(&ids)
        .list(&RequestContext::new(&router, 42, NOW), 0)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
