//! Domain models for the bridge records server.

use utoipa::ToSchema;

pub mod bridge;
pub mod condition;
pub mod dashboard;
pub mod maintenance;
pub mod traffic;

// Re-export commonly used types
pub use bridge::{
    BridgeDetailResponse, BridgeListResponse, BridgeMutationResponse, BridgeRequest,
    BridgeSummary, BridgeType, ListBridgesQuery, Material,
};
pub use condition::{ConditionCategory, ConditionRatings, ConditionSummary};
pub use dashboard::{CategoryStat, ConditionDistribution, DashboardStats, RecentMaintenance};
pub use maintenance::{
    ActionType, MaintenanceListResponse, MaintenanceMutationResponse, MaintenanceRecordResponse,
    MaintenanceRequest,
};
pub use traffic::{TrafficRequest, TrafficResponse, TrafficUpsertResponse, UpsertOutcome};

/// Pagination parameters.
#[derive(Debug, Clone, Default, serde::Deserialize, ToSchema)]
pub struct PaginationParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

impl PaginationParams {
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        PaginationParams { page, limit }
    }

    /// Requested page, never below 1.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(default_page()).max(1)
    }

    /// Calculate the offset for queries.
    pub fn offset(&self) -> u32 {
        (self.page() - 1) * self.clamped_limit()
    }

    /// Clamp limit to the allowed range.
    pub fn clamped_limit(&self) -> u32 {
        self.limit.unwrap_or(default_limit()).clamp(1, 100)
    }
}

/// Pagination metadata for responses.
#[derive(Debug, Clone, serde::Serialize, ToSchema)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    /// Create pagination metadata.
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit)) as u32
        };

        Pagination {
            page,
            limit,
            total,
            total_pages,
        }
    }
}
