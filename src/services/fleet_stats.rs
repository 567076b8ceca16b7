//! Fleet-wide statistics for the dashboard.
//!
//! Every function here works on already-fetched collections and never
//! divides by zero: empty inputs produce zeroed figures.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::entity::{bridge, maintenance_record, traffic_data};
use crate::models::{
    CategoryStat, ConditionCategory, ConditionDistribution, ConditionSummary, DashboardStats,
    MaintenanceRecordResponse, RecentMaintenance,
};

/// Number of entries in the dashboard's recent-maintenance list.
pub const RECENT_MAINTENANCE_LIMIT: usize = 5;

/// `round(100 * part / whole, 1)`, or zero when `whole` is zero.
fn percentage(part: u64, whole: u64) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(part) * Decimal::from(100) / Decimal::from(whole))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Tally bridges into the five named condition categories.
pub fn condition_distribution(bridges: &[bridge::Model]) -> ConditionDistribution {
    let mut counts: BTreeMap<ConditionCategory, u64> = ConditionCategory::RATED
        .iter()
        .map(|category| (*category, 0))
        .collect();

    for bridge in bridges {
        let category = ConditionSummary::from_ratings(&bridge.ratings()).category;
        if let Some(count) = counts.get_mut(&category) {
            *count += 1;
        }
    }

    let total_bridges = bridges.len() as u64;
    let buckets = counts
        .into_iter()
        .map(|(category, count)| {
            (
                category,
                CategoryStat {
                    count,
                    percentage: percentage(count, total_bridges),
                },
            )
        })
        .collect();

    ConditionDistribution {
        total_bridges,
        buckets,
    }
}

/// Truncated mean heavy count plus truncated mean small count.
///
/// Each mean is truncated before summing.
pub fn average_daily_traffic(snapshots: &[traffic_data::Model]) -> i64 {
    if snapshots.is_empty() {
        return 0;
    }
    let count = snapshots.len() as i64;
    let heavy: i64 = snapshots.iter().map(|t| i64::from(t.heavy_vehicles)).sum();
    let small: i64 = snapshots.iter().map(|t| i64::from(t.small_vehicles)).sum();

    // Integer division truncates toward zero, matching truncation of each mean.
    heavy / count + small / count
}

/// Share of records flagged completed, as a percentage.
pub fn maintenance_completion_rate(records: &[maintenance_record::Model]) -> Decimal {
    let completed = records.iter().filter(|r| r.is_completed).count() as u64;
    percentage(completed, records.len() as u64)
}

/// The most recently created records, newest first, with bridge names.
pub fn recent_maintenance(
    records: &[maintenance_record::Model],
    bridges: &[bridge::Model],
) -> Vec<RecentMaintenance> {
    let names: HashMap<Uuid, &str> = bridges.iter().map(|b| (b.id, b.name.as_str())).collect();

    let mut newest: Vec<&maintenance_record::Model> = records.iter().collect();
    newest.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    newest
        .into_iter()
        .take(RECENT_MAINTENANCE_LIMIT)
        .map(|record| RecentMaintenance {
            bridge_name: names.get(&record.bridge_id).map(|name| name.to_string()),
            record: MaintenanceRecordResponse::from(record),
        })
        .collect()
}

/// Compute every dashboard figure from the full collections.
pub fn dashboard(
    bridges: &[bridge::Model],
    traffic: &[traffic_data::Model],
    records: &[maintenance_record::Model],
) -> DashboardStats {
    DashboardStats {
        total_bridges: bridges.len() as u64,
        condition_stats: condition_distribution(bridges),
        average_daily_traffic: average_daily_traffic(traffic),
        total_maintenance_records: records.len() as u64,
        completed_maintenance_records: records.iter().filter(|r| r.is_completed).count() as u64,
        maintenance_completion_rate: maintenance_completion_rate(records),
        recent_maintenance: recent_maintenance(records, bridges),
    }
}
