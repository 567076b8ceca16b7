//! Dashboard statistics models.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::condition::ConditionCategory;
use super::maintenance::MaintenanceRecordResponse;

/// Count and share of bridges in one condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryStat {
    pub count: u64,
    /// Share of all bridges, one decimal place
    pub percentage: Decimal,
}

/// Bridges per named condition category.
///
/// Bridges without any rating count toward `total_bridges` but not toward
/// any bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ConditionDistribution {
    pub total_bridges: u64,
    pub buckets: BTreeMap<ConditionCategory, CategoryStat>,
}

impl ConditionDistribution {
    /// Stats for one category; zeroed for categories without a bucket.
    pub fn get(&self, category: ConditionCategory) -> CategoryStat {
        self.buckets.get(&category).copied().unwrap_or(CategoryStat {
            count: 0,
            percentage: Decimal::ZERO,
        })
    }
}

/// Maintenance record annotated with its owning bridge.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecentMaintenance {
    pub bridge_name: Option<String>,
    #[serde(flatten)]
    pub record: MaintenanceRecordResponse,
}

/// Fleet-level figures shown on the dashboard.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardStats {
    pub total_bridges: u64,
    pub condition_stats: ConditionDistribution,
    /// Mean heavy plus mean small daily vehicles, each truncated first
    pub average_daily_traffic: i64,
    pub total_maintenance_records: u64,
    pub completed_maintenance_records: u64,
    /// Completed share of all records, one decimal place
    pub maintenance_completion_rate: Decimal,
    pub recent_maintenance: Vec<RecentMaintenance>,
}
