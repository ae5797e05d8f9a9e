pub use sea_orm_migration::prelude::*;

mod m20250310_090000_accounts;
mod m20250310_091500_expenses;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_090000_accounts::Migration),
            Box::new(m20250310_091500_expenses::Migration),
        ]
    }
}
