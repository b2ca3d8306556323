pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_member_table;
mod m20260301_000002_create_code_sequence_table;
mod m20260301_000003_create_product_table;
mod m20260301_000004_create_order_table;
mod m20260301_000005_create_order_item_table;
mod m20260301_000006_create_fixture_table;
mod m20260301_000007_create_news_table;
mod m20260301_000008_create_contact_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_member_table::Migration),
            Box::new(m20260301_000002_create_code_sequence_table::Migration),
            Box::new(m20260301_000003_create_product_table::Migration),
            Box::new(m20260301_000004_create_order_table::Migration),
            Box::new(m20260301_000005_create_order_item_table::Migration),
            Box::new(m20260301_000006_create_fixture_table::Migration),
            Box::new(m20260301_000007_create_news_table::Migration),
            Box::new(m20260301_000008_create_contact_table::Migration),
        ]
    }
}
