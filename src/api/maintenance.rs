//! Maintenance record API handlers.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use tracing::info;
use uuid::Uuid;

use crate::db::DbPool;
use crate::entity::maintenance_record;
use crate::error::{AppError, AppResult};
use crate::models::{
    MaintenanceListResponse, MaintenanceMutationResponse, MaintenanceRecordResponse,
    MaintenanceRequest,
};

use super::bridge_scope::BridgeScope;

async fn find_record(pool: &DbPool, record_id: Uuid) -> AppResult<maintenance_record::Model> {
    pool.get_maintenance_record(record_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Maintenance record {}", record_id)))
}

/// List all maintenance records of a bridge, latest scheduled first.
#[utoipa::path(
    get,
    path = "/api/v1/bridges/{bridge_id}/maintenance",
    tag = "Maintenance",
    params(
        ("bridge_id" = Uuid, Path, description = "Bridge ID")
    ),
    responses(
        (status = 200, description = "Maintenance records", body = MaintenanceListResponse),
        (status = 404, description = "Bridge not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_bridge_maintenance(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let scope = BridgeScope::resolve(&pool, path.into_inner()).await?;
    let records = pool.list_maintenance_for_bridge(scope.bridge.id, None).await?;

    Ok(HttpResponse::Ok().json(MaintenanceListResponse {
        bridge_id: scope.bridge.id,
        bridge_name: scope.bridge.name,
        records: records.iter().map(MaintenanceRecordResponse::from).collect(),
    }))
}

/// Log a maintenance action against a bridge.
#[utoipa::path(
    post,
    path = "/api/v1/bridges/{bridge_id}/maintenance",
    tag = "Maintenance",
    params(
        ("bridge_id" = Uuid, Path, description = "Bridge ID")
    ),
    request_body = MaintenanceRequest,
    responses(
        (status = 201, description = "Record created", body = MaintenanceMutationResponse),
        (status = 404, description = "Bridge not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid fields", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_maintenance(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<MaintenanceRequest>,
) -> AppResult<HttpResponse> {
    let scope = BridgeScope::resolve(&pool, path.into_inner()).await?;
    let req = body.into_inner();
    req.validate()?;

    let record = pool.insert_maintenance_record(scope.bridge.id, &req).await?;

    info!(
        record_id = %record.id,
        bridge_id = %scope.bridge.id,
        action_type = %record.action_type,
        "Maintenance record created"
    );

    Ok(scope.respond(
        StatusCode::CREATED,
        &MaintenanceMutationResponse {
            message: "Maintenance record created successfully!".to_string(),
            redirect_to: scope.detail_location(),
            record: Some(MaintenanceRecordResponse::from(&record)),
        },
    ))
}

/// Get a maintenance record.
#[utoipa::path(
    get,
    path = "/api/v1/maintenance/{record_id}",
    tag = "Maintenance",
    params(
        ("record_id" = Uuid, Path, description = "Maintenance record ID")
    ),
    responses(
        (status = 200, description = "Maintenance record", body = MaintenanceRecordResponse),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_maintenance(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let record = find_record(&pool, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MaintenanceRecordResponse::from(&record)))
}

/// Replace a maintenance record. The owning bridge cannot change.
#[utoipa::path(
    put,
    path = "/api/v1/maintenance/{record_id}",
    tag = "Maintenance",
    params(
        ("record_id" = Uuid, Path, description = "Maintenance record ID")
    ),
    request_body = MaintenanceRequest,
    responses(
        (status = 200, description = "Record updated", body = MaintenanceMutationResponse),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid fields", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_maintenance(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
    body: web::Json<MaintenanceRequest>,
) -> AppResult<HttpResponse> {
    let existing = find_record(&pool, path.into_inner()).await?;
    let scope = BridgeScope::resolve(&pool, existing.bridge_id).await?;
    let req = body.into_inner();
    req.validate()?;

    let record = pool.update_maintenance_record(existing.id, &req).await?;

    info!(record_id = %record.id, bridge_id = %scope.bridge.id, "Maintenance record updated");

    Ok(scope.respond(
        StatusCode::OK,
        &MaintenanceMutationResponse {
            message: "Maintenance record updated successfully!".to_string(),
            redirect_to: scope.detail_location(),
            record: Some(MaintenanceRecordResponse::from(&record)),
        },
    ))
}

/// Delete a maintenance record.
#[utoipa::path(
    delete,
    path = "/api/v1/maintenance/{record_id}",
    tag = "Maintenance",
    params(
        ("record_id" = Uuid, Path, description = "Maintenance record ID")
    ),
    responses(
        (status = 200, description = "Record deleted", body = MaintenanceMutationResponse),
        (status = 404, description = "Record not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_maintenance(
    pool: web::Data<DbPool>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let existing = find_record(&pool, path.into_inner()).await?;
    let scope = BridgeScope::resolve(&pool, existing.bridge_id).await?;

    if !pool.delete_maintenance_record(existing.id).await? {
        return Err(AppError::NotFound(format!("Maintenance record {}", existing.id)));
    }

    info!(record_id = %existing.id, bridge_id = %scope.bridge.id, "Maintenance record deleted");

    Ok(scope.respond(
        StatusCode::OK,
        &MaintenanceMutationResponse {
            message: "Maintenance record deleted successfully!".to_string(),
            redirect_to: scope.detail_location(),
            record: None,
        },
    ))
}

/// Configure maintenance routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/bridges/{bridge_id}/maintenance")
            .route(web::get().to(list_bridge_maintenance))
            .route(web::post().to(create_maintenance)),
    )
    .service(
        web::resource("/maintenance/{record_id}")
            .route(web::get().to(get_maintenance))
            .route(web::put().to(update_maintenance))
            .route(web::delete().to(delete_maintenance)),
    );
}
