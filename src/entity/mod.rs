//! SeaORM entity definitions for PostgreSQL database.

pub mod bridge;
pub mod maintenance_record;
pub mod traffic_data;
