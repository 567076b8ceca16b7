//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bridge Records Server",
        description = "Records of bridge condition ratings, daily traffic and maintenance history"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Dashboard
        api::dashboard::get_dashboard,
        // Bridge endpoints
        api::bridges::list_bridges,
        api::bridges::create_bridge,
        api::bridges::get_bridge,
        api::bridges::update_bridge,
        api::bridges::delete_bridge,
        // Traffic endpoints
        api::traffic::get_traffic,
        api::traffic::upsert_traffic,
        // Maintenance endpoints
        api::maintenance::list_bridge_maintenance,
        api::maintenance::create_maintenance,
        api::maintenance::get_maintenance,
        api::maintenance::update_maintenance,
        api::maintenance::delete_maintenance,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            error::FieldError,
            models::Pagination,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Condition
            models::ConditionRatings,
            models::ConditionCategory,
            models::ConditionSummary,
            // Bridges
            models::BridgeType,
            models::Material,
            models::BridgeRequest,
            models::BridgeSummary,
            models::BridgeListResponse,
            models::BridgeDetailResponse,
            models::BridgeMutationResponse,
            api::bridges::BridgeDeletedResponse,
            // Traffic
            models::TrafficRequest,
            models::TrafficResponse,
            models::TrafficUpsertResponse,
            models::UpsertOutcome,
            // Maintenance
            models::ActionType,
            models::MaintenanceRequest,
            models::MaintenanceRecordResponse,
            models::MaintenanceListResponse,
            models::MaintenanceMutationResponse,
            // Dashboard
            models::CategoryStat,
            models::ConditionDistribution,
            models::RecentMaintenance,
            models::DashboardStats,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Dashboard", description = "Fleet-wide statistics"),
        (name = "Bridges", description = "Bridge records and condition ratings"),
        (name = "Traffic", description = "Daily traffic snapshot per bridge"),
        (name = "Maintenance", description = "Maintenance history per bridge")
    ),
    modifiers(&VersionAddon)
)]
pub struct ApiDoc;

/// Stamp the crate version onto the document.
struct VersionAddon;

impl utoipa::Modify for VersionAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.version = env!("CARGO_PKG_VERSION").to_string();
    }
}
