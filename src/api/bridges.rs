//! Bridge API handlers.

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    BridgeDetailResponse, BridgeListResponse, BridgeMutationResponse, BridgeRequest,
    BridgeSummary, ListBridgesQuery, MaintenanceRecordResponse, PaginationParams,
    TrafficResponse,
};
use crate::services::{BridgeFilter, filter_and_paginate};

use super::bridge_scope::{BRIDGES_PATH, bridge_detail_path};

/// Maintenance records shown on the bridge detail view.
const DETAIL_MAINTENANCE_LIMIT: u64 = 5;

/// Response for bridge deletion.
#[derive(Debug, Serialize, ToSchema)]
pub struct BridgeDeletedResponse {
    pub message: String,
    /// Bridge list path to show next
    pub redirect_to: String,
}

/// List bridges with search, condition filter and pagination.
#[utoipa::path(
    get,
    path = "/api/v1/bridges",
    tag = "Bridges",
    params(ListBridgesQuery),
    responses(
        (status = 200, description = "Page of bridges", body = BridgeListResponse),
        (status = 400, description = "Unknown condition filter", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_bridges(
    pool: web::Data<DbPool>,
    query: web::Query<ListBridgesQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let filter = BridgeFilter::parse(query.search.as_deref(), query.condition.as_deref())?;
    let params = PaginationParams::new(query.page, query.limit);

    let bridges = pool.list_bridges().await?;
    let total_bridges = bridges.len() as u64;
    let (page, pagination) = filter_and_paginate(bridges, &filter, &params);

    let response = BridgeListResponse {
        bridges: page.iter().map(BridgeSummary::from).collect(),
        pagination,
        total_bridges,
        search_query: query.search.unwrap_or_default(),
        condition_filter: query.condition.unwrap_or_default(),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Create a bridge.
#[utoipa::path(
    post,
    path = "/api/v1/bridges",
    tag = "Bridges",
    request_body = BridgeRequest,
    responses(
        (status = 201, description = "Bridge created", body = BridgeMutationResponse),
        (status = 409, description = "Name already in use", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid fields", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_bridge(
    pool: web::Data<DbPool>,
    body: web::Json<BridgeRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate()?;

    let bridge = pool.insert_bridge(&req).await?;

    info!(bridge_id = %bridge.id, name = %bridge.name, "Bridge created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, bridge_detail_path(bridge.id)))
        .json(BridgeMutationResponse {
            message: "Bridge created successfully!".to_string(),
            bridge: BridgeSummary::from(&bridge),
        }))
}

/// Get a bridge with its condition, traffic and latest maintenance.
#[utoipa::path(
    get,
    path = "/api/v1/bridges/{bridge_id}",
    tag = "Bridges",
    params(
        ("bridge_id" = Uuid, Path, description = "Bridge ID")
    ),
    responses(
        (status = 200, description = "Bridge detail", body = BridgeDetailResponse),
        (status = 404, description = "Bridge not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_bridge(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let bridge_id = path.into_inner();

    let bridge = pool
        .get_bridge_by_id(bridge_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Bridge {}", bridge_id)))?;

    let traffic = pool
        .get_traffic_for_bridge(bridge_id)
        .await?
        .as_ref()
        .map(TrafficResponse::from);

    let records = pool
        .list_maintenance_for_bridge(bridge_id, Some(DETAIL_MAINTENANCE_LIMIT))
        .await?;

    let response = BridgeDetailResponse::new(
        &bridge,
        traffic,
        records.iter().map(MaintenanceRecordResponse::from).collect(),
    );

    Ok(HttpResponse::Ok().json(response))
}

/// Replace a bridge's attributes and ratings.
#[utoipa::path(
    put,
    path = "/api/v1/bridges/{bridge_id}",
    tag = "Bridges",
    params(
        ("bridge_id" = Uuid, Path, description = "Bridge ID")
    ),
    request_body = BridgeRequest,
    responses(
        (status = 200, description = "Bridge updated", body = BridgeMutationResponse),
        (status = 404, description = "Bridge not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Name already in use", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid fields", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_bridge(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<BridgeRequest>,
) -> AppResult<HttpResponse> {
    let bridge_id = path.into_inner();
    let req = body.into_inner();
    req.validate()?;

    let bridge = pool.update_bridge(bridge_id, &req).await?;

    info!(bridge_id = %bridge.id, name = %bridge.name, "Bridge updated");

    Ok(HttpResponse::Ok()
        .insert_header((header::LOCATION, bridge_detail_path(bridge.id)))
        .json(BridgeMutationResponse {
            message: "Bridge updated successfully!".to_string(),
            bridge: BridgeSummary::from(&bridge),
        }))
}

/// Delete a bridge together with its traffic data and maintenance records.
#[utoipa::path(
    delete,
    path = "/api/v1/bridges/{bridge_id}",
    tag = "Bridges",
    params(
        ("bridge_id" = Uuid, Path, description = "Bridge ID")
    ),
    responses(
        (status = 200, description = "Bridge deleted", body = BridgeDeletedResponse),
        (status = 404, description = "Bridge not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_bridge(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let bridge_id = path.into_inner();

    if !pool.delete_bridge(bridge_id).await? {
        return Err(AppError::NotFound(format!("Bridge {}", bridge_id)));
    }

    info!(bridge_id = %bridge_id, "Bridge deleted");

    Ok(HttpResponse::Ok().json(BridgeDeletedResponse {
        message: "Bridge deleted successfully!".to_string(),
        redirect_to: BRIDGES_PATH.to_string(),
    }))
}

/// Configure bridge routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/bridges")
            .route(web::get().to(list_bridges))
            .route(web::post().to(create_bridge)),
    )
    .service(
        web::resource("/bridges/{bridge_id}")
            .route(web::get().to(get_bridge))
            .route(web::put().to(update_bridge))
            .route(web::delete().to(delete_bridge)),
    );
}
