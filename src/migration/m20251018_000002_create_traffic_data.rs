//! Migration: Create traffic_data table.
//!
//! At most one daily-count snapshot per bridge.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE traffic_data (
                    id UUID PRIMARY KEY,
                    bridge_id UUID NOT NULL UNIQUE REFERENCES bridges(id) ON DELETE CASCADE,
                    heavy_vehicles INTEGER NOT NULL DEFAULT 0 CHECK (heavy_vehicles >= 0),
                    small_vehicles INTEGER NOT NULL DEFAULT 0 CHECK (small_vehicles >= 0),
                    recorded_date DATE NOT NULL DEFAULT CURRENT_DATE
                );
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS traffic_data CASCADE;")
            .await?;

        Ok(())
    }
}
