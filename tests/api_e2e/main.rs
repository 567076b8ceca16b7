//! API E2E test suite.
//!
//! Drives the full `/api/v1` surface against a real PostgreSQL database.
//! Requires RUST_ENV and a DATABASE_URL pointing at a running PostgreSQL.
//!
//! Run with: cargo test --test api_e2e

mod test_helpers;

mod test_bridges;
mod test_dashboard;
mod test_maintenance;
mod test_traffic;
