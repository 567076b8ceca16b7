//! Dashboard API handler.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::DashboardStats;
use crate::services::fleet_stats;

/// Fleet-wide condition, traffic and maintenance statistics.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats)
    )
)]
pub async fn get_dashboard(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let bridges = pool.list_bridges().await?;
    let traffic = pool.list_traffic().await?;
    let records = pool.list_maintenance_records().await?;

    let stats = fleet_stats::dashboard(&bridges, &traffic, &records);

    Ok(HttpResponse::Ok().json(stats))
}

/// Configure dashboard routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/dashboard").route(web::get().to(get_dashboard)));
}
