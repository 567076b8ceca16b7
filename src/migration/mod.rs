//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20251018_000001_create_bridges;
mod m20251018_000002_create_traffic_data;
mod m20251018_000003_create_maintenance_records;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251018_000001_create_bridges::Migration),
            Box::new(m20251018_000002_create_traffic_data::Migration),
            Box::new(m20251018_000003_create_maintenance_records::Migration),
        ]
    }
}
