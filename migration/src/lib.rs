pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users_table;
mod m20250101_000002_create_user_sessions_table;
mod m20250101_000003_create_user_bans_table;
mod m20250101_000004_create_item_masters_table;
mod m20250101_000005_create_user_presents_table;
mod m20250101_000006_create_user_items_table;
mod m20250101_000007_create_user_cards_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users_table::Migration),
            Box::new(m20250101_000002_create_user_sessions_table::Migration),
            Box::new(m20250101_000003_create_user_bans_table::Migration),
            Box::new(m20250101_000004_create_item_masters_table::Migration),
            Box::new(m20250101_000005_create_user_presents_table::Migration),
            Box::new(m20250101_000006_create_user_items_table::Migration),
            Box::new(m20250101_000007_create_user_cards_table::Migration),
        ]
    }
}
