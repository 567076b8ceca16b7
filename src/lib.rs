//! Bridge records server library.
//!
//! Bridge inventory with condition ratings, per-bridge traffic snapshots
//! and maintenance history, plus the fleet statistics derived from them.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod services;
