//! Database queries for bridges.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entity::bridge::{self, ActiveModel, Entity as Bridge};
use crate::error::{AppError, AppResult};
use crate::models::BridgeRequest;

use super::{DbPool, write_error};

fn name_taken(name: &str) -> String {
    format!("A bridge named '{}' already exists", name)
}

impl DbPool {
    /// Insert a new bridge.
    pub async fn insert_bridge(&self, req: &BridgeRequest) -> AppResult<bridge::Model> {
        let now = Utc::now();
        let name = req.name.trim().to_string();

        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(name.clone()),
            bridge_type: Set(req.bridge_type.as_str().to_string()),
            length: Set(req.length),
            width: Set(req.width),
            lanes: Set(req.lanes),
            material: Set(req.material.as_str().to_string()),
            year_built: Set(req.year_built),
            route: Set(req.route.trim().to_string()),
            gps_coordinates: Set(req.gps_coordinates.trim().to_string()),
            deck_rating: Set(req.deck_rating),
            girders_rating: Set(req.girders_rating),
            piers_rating: Set(req.piers_rating),
            abutment_rating: Set(req.abutment_rating),
            condition_notes: Set(req.normalized_notes()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model
            .insert(self.connection())
            .await
            .map_err(|e| write_error(e, "Failed to insert bridge", || name_taken(&name)))
    }

    /// Get a bridge by ID.
    pub async fn get_bridge_by_id(&self, id: Uuid) -> AppResult<Option<bridge::Model>> {
        let result = Bridge::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get bridge: {}", e)))?;

        Ok(result)
    }

    /// Get a bridge by its unique name.
    pub async fn find_bridge_by_name(&self, name: &str) -> AppResult<Option<bridge::Model>> {
        let result = Bridge::find()
            .filter(bridge::Column::Name.eq(name))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to find bridge: {}", e)))?;

        Ok(result)
    }

    /// All bridges ordered by name.
    pub async fn list_bridges(&self) -> AppResult<Vec<bridge::Model>> {
        let result = Bridge::find()
            .order_by_asc(bridge::Column::Name)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list bridges: {}", e)))?;

        Ok(result)
    }

    /// Count all bridges.
    pub async fn count_bridges(&self) -> AppResult<u64> {
        Bridge::find()
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count bridges: {}", e)))
    }

    /// Replace every editable field of a bridge.
    pub async fn update_bridge(&self, id: Uuid, req: &BridgeRequest) -> AppResult<bridge::Model> {
        let bridge = self
            .get_bridge_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bridge {}", id)))?;

        let name = req.name.trim().to_string();
        let mut active: ActiveModel = bridge.into();
        active.name = Set(name.clone());
        active.bridge_type = Set(req.bridge_type.as_str().to_string());
        active.length = Set(req.length);
        active.width = Set(req.width);
        active.lanes = Set(req.lanes);
        active.material = Set(req.material.as_str().to_string());
        active.year_built = Set(req.year_built);
        active.route = Set(req.route.trim().to_string());
        active.gps_coordinates = Set(req.gps_coordinates.trim().to_string());
        active.deck_rating = Set(req.deck_rating);
        active.girders_rating = Set(req.girders_rating);
        active.piers_rating = Set(req.piers_rating);
        active.abutment_rating = Set(req.abutment_rating);
        active.condition_notes = Set(req.normalized_notes());
        active.updated_at = Set(Utc::now());

        active
            .update(self.connection())
            .await
            .map_err(|e| write_error(e, "Failed to update bridge", || name_taken(&name)))
    }

    /// Delete a bridge. Traffic and maintenance rows go with it via
    /// `ON DELETE CASCADE`. Returns false when the bridge did not exist.
    pub async fn delete_bridge(&self, id: Uuid) -> AppResult<bool> {
        let Some(bridge) = self.get_bridge_by_id(id).await? else {
            return Ok(false);
        };

        let result = bridge
            .delete(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete bridge: {}", e)))?;

        Ok(result.rows_affected > 0)
    }
}
