//! Parent-bridge resolution shared by traffic and maintenance handlers.

use actix_web::http::{StatusCode, header};
use actix_web::HttpResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::db::DbPool;
use crate::entity::bridge;
use crate::error::{AppError, AppResult};

/// Base path of the bridge collection.
pub const BRIDGES_PATH: &str = "/api/v1/bridges";

/// Path of a bridge's detail view.
pub fn bridge_detail_path(bridge_id: Uuid) -> String {
    format!("{}/{}", BRIDGES_PATH, bridge_id)
}

/// A bridge that owns the record being read or written.
#[derive(Debug, Clone)]
pub struct BridgeScope {
    pub bridge: bridge::Model,
}

impl BridgeScope {
    /// Load the owning bridge, or fail with 404.
    pub async fn resolve(pool: &DbPool, bridge_id: Uuid) -> AppResult<Self> {
        let bridge = pool
            .get_bridge_by_id(bridge_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bridge {}", bridge_id)))?;

        Ok(BridgeScope { bridge })
    }

    /// Where clients go after a successful write.
    pub fn detail_location(&self) -> String {
        bridge_detail_path(self.bridge.id)
    }

    /// JSON response pointing back at the bridge detail view.
    pub fn respond<T: Serialize>(&self, status: StatusCode, body: &T) -> HttpResponse {
        HttpResponse::build(status)
            .insert_header((header::LOCATION, self.detail_location()))
            .json(body)
    }
}
