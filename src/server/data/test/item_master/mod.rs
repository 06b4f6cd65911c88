use crate::server::data::item_master::ItemMasterRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests loading catalogue entries by ID.
///
/// Expected: only the known IDs are returned
#[tokio::test]
async fn finds_known_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_present_tables().build().await.unwrap();
    let db = test.db();
    factory::item_master::create_card_master(db, 40, 8).await?;
    factory::item_master::create_material_master(db, 7, 3).await?;

    let mut found = ItemMasterRepository::new(db).find_by_ids(&[40, 7, 99]).await?;
    found.sort_by_key(|m| m.id);

    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, 7);
    assert_eq!(found[1].amount_per_sec, Some(8));

    Ok(())
}
