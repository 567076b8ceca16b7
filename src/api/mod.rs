//! API endpoint modules.

pub mod bridge_scope;
pub mod bridges;
pub mod dashboard;
pub mod health;
pub mod maintenance;
pub mod openapi;
pub mod traffic;

pub use bridge_scope::BridgeScope;
pub use bridges::configure_routes as configure_bridge_routes;
pub use dashboard::configure_routes as configure_dashboard_routes;
pub use health::configure_health_routes;
pub use maintenance::configure_routes as configure_maintenance_routes;
pub use openapi::ApiDoc;
pub use traffic::configure_routes as configure_traffic_routes;

use actix_web::web;

/// Mount every `/api/v1` route.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_health_routes)
        .configure(configure_dashboard_routes)
        .configure(configure_bridge_routes)
        .configure(configure_traffic_routes)
        .configure(configure_maintenance_routes);
}
