//! Migration: Create maintenance_records table.
//!
//! The completion flag/date pairing is enforced by the database as well
//! as by request validation.

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
                CREATE TABLE maintenance_records (
                    id UUID PRIMARY KEY, -- UUIDv7 for time-ordered sorting
                    bridge_id UUID NOT NULL REFERENCES bridges(id) ON DELETE CASCADE,
                    action_type VARCHAR(50) NOT NULL
                        CHECK (action_type IN ('minor_repair', 'routine', 'monitoring', 'major_repair', 'inspection')),
                    description TEXT NOT NULL,
                    scheduled_date DATE NOT NULL,
                    completed_date DATE,
                    cost NUMERIC(10, 2) CHECK (cost >= 0),
                    is_completed BOOLEAN NOT NULL DEFAULT FALSE,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

                    CONSTRAINT chk_maintenance_completion
                        CHECK (is_completed = (completed_date IS NOT NULL)),
                    CONSTRAINT chk_maintenance_dates
                        CHECK (completed_date IS NULL OR completed_date >= scheduled_date)
                );

                -- Per-bridge listing, most recent schedule first
                CREATE INDEX idx_maintenance_records_bridge_scheduled
                    ON maintenance_records(bridge_id, scheduled_date DESC);

                -- Dashboard "recent maintenance"
                CREATE INDEX idx_maintenance_records_created_at
                    ON maintenance_records(created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS maintenance_records CASCADE;")
            .await?;

        Ok(())
    }
}
