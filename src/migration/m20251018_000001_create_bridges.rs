//! Migration: Create bridges table and shared trigger function.
//!
//! Bridges are the root records; traffic snapshots and maintenance
//! records hang off them. Also creates the shared updated_at trigger function.

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
                -- Shared trigger function for updated_at
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = NOW();
                    RETURN NEW;
                END;
                $$ LANGUAGE plpgsql;

                CREATE TABLE bridges (
                    id UUID PRIMARY KEY, -- UUIDv7 for time-ordered sorting
                    name VARCHAR(100) NOT NULL UNIQUE,
                    bridge_type VARCHAR(50) NOT NULL
                        CHECK (bridge_type IN ('beam_composite', 'suspension', 'arch', 'truss')),
                    length NUMERIC(6, 3) NOT NULL CHECK (length > 0),   -- metres
                    width NUMERIC(5, 2) NOT NULL CHECK (width > 0),     -- metres
                    lanes INTEGER NOT NULL CHECK (lanes >= 1),
                    material VARCHAR(50) NOT NULL
                        CHECK (material IN ('steel_concrete', 'concrete', 'steel')),
                    year_built INTEGER NOT NULL CHECK (year_built >= 0),
                    route TEXT NOT NULL,
                    gps_coordinates TEXT NOT NULL,

                    -- Component condition ratings (1-5, any subset may be unset)
                    deck_rating INTEGER CHECK (deck_rating BETWEEN 1 AND 5),
                    girders_rating INTEGER CHECK (girders_rating BETWEEN 1 AND 5),
                    piers_rating INTEGER CHECK (piers_rating BETWEEN 1 AND 5),
                    abutment_rating INTEGER CHECK (abutment_rating BETWEEN 1 AND 5),

                    condition_notes TEXT,

                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                -- Default listing order
                CREATE INDEX idx_bridges_name ON bridges(name);

                -- Trigger to update updated_at
                CREATE TRIGGER update_bridges_updated_at
                    BEFORE UPDATE ON bridges
                    FOR EACH ROW
                    EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_bridges_updated_at ON bridges;
                DROP TABLE IF EXISTS bridges CASCADE;
                DROP FUNCTION IF EXISTS update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }
}
