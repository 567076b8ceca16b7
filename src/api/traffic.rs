//! Traffic snapshot API handlers.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{TrafficRequest, TrafficResponse, TrafficUpsertResponse, UpsertOutcome};

use super::bridge_scope::BridgeScope;

/// Get the traffic snapshot of a bridge.
#[utoipa::path(
    get,
    path = "/api/v1/bridges/{bridge_id}/traffic",
    tag = "Traffic",
    params(
        ("bridge_id" = Uuid, Path, description = "Bridge ID")
    ),
    responses(
        (status = 200, description = "Traffic snapshot", body = TrafficResponse),
        (status = 404, description = "Bridge or snapshot not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_traffic(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let scope = BridgeScope::resolve(&pool, path.into_inner()).await?;

    let traffic = pool
        .get_traffic_for_bridge(scope.bridge.id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Traffic data for bridge {}", scope.bridge.id)))?;

    Ok(HttpResponse::Ok().json(TrafficResponse::from(&traffic)))
}

/// Create or overwrite the traffic snapshot of a bridge.
///
/// Responds 201 when a snapshot was created and 200 when one was updated.
#[utoipa::path(
    put,
    path = "/api/v1/bridges/{bridge_id}/traffic",
    tag = "Traffic",
    params(
        ("bridge_id" = Uuid, Path, description = "Bridge ID")
    ),
    request_body = TrafficRequest,
    responses(
        (status = 200, description = "Snapshot updated", body = TrafficUpsertResponse),
        (status = 201, description = "Snapshot created", body = TrafficUpsertResponse),
        (status = 404, description = "Bridge not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid counts", body = crate::error::ErrorResponse),
    )
)]
pub async fn upsert_traffic(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<TrafficRequest>,
) -> AppResult<HttpResponse> {
    let scope = BridgeScope::resolve(&pool, path.into_inner()).await?;
    let req = body.into_inner();
    req.validate()?;

    let (outcome, traffic) = pool.upsert_traffic(scope.bridge.id, &req).await?;

    info!(
        bridge_id = %scope.bridge.id,
        outcome = ?outcome,
        total_vehicles = traffic.total_vehicles(),
        "Traffic data saved"
    );

    let status = match outcome {
        UpsertOutcome::Created => StatusCode::CREATED,
        UpsertOutcome::Updated => StatusCode::OK,
    };

    Ok(scope.respond(
        status,
        &TrafficUpsertResponse {
            outcome,
            message: outcome.message().to_string(),
            redirect_to: scope.detail_location(),
            traffic: TrafficResponse::from(&traffic),
        },
    ))
}

/// Configure traffic routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/bridges/{bridge_id}/traffic")
            .route(web::get().to(get_traffic))
            .route(web::put().to(upsert_traffic)),
    );
}
