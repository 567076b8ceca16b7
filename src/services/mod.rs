//! Business logic services.

pub mod bridge_listing;
pub mod condition;
pub mod fleet_stats;
pub mod seed;

pub use bridge_listing::{BridgeFilter, filter_and_paginate};
pub use seed::{SeedSummary, load_initial_data};
