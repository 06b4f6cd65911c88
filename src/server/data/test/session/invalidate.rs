use super::*;
use sea_orm::EntityTrait;

/// Tests soft-deleting a session.
///
/// Expected: one row affected and deleted_at set to the given time
#[tokio::test]
async fn soft_deletes_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::user::create_user(db).await?;
    let session = factory::user_session::create_session(db, user.id).await?;

    let affected = SessionRepository::new(db).invalidate(session.id, 50).await?;

    assert_eq!(affected, 1);
    let stored = entity::prelude::UserSession::find_by_id(session.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.deleted_at, Some(50));

    Ok(())
}

/// Tests that invalidating twice keeps the first end time.
///
/// Expected: second call affects no rows and deleted_at is unchanged
#[tokio::test]
async fn keeps_first_end_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db();
    let user = factory::user::create_user(db).await?;
    let session = factory::user_session::create_session(db, user.id).await?;

    let repo = SessionRepository::new(db);
    repo.invalidate(session.id, 50).await?;
    let affected = repo.invalidate(session.id, 60).await?;

    assert_eq!(affected, 0);
    let stored = entity::prelude::UserSession::find_by_id(session.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.deleted_at, Some(50));

    Ok(())
}
