//! Database queries for maintenance records.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};
use uuid::Uuid;

use crate::entity::maintenance_record::{self as record, ActiveModel, Entity as MaintenanceRecord};
use crate::error::{AppError, AppResult};
use crate::models::MaintenanceRequest;

use super::DbPool;

impl DbPool {
    /// Insert a maintenance record for a bridge.
    pub async fn insert_maintenance_record(
        &self,
        bridge_id: Uuid,
        req: &MaintenanceRequest,
    ) -> AppResult<record::Model> {
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            bridge_id: Set(bridge_id),
            action_type: Set(req.action_type.as_str().to_string()),
            description: Set(req.description.trim().to_string()),
            scheduled_date: Set(req.scheduled_date),
            completed_date: Set(req.completed_date),
            cost: Set(req.cost),
            is_completed: Set(req.is_completed),
            created_at: Set(Utc::now()),
        };

        let result = model.insert(self.connection()).await.map_err(|e| {
            AppError::Database(format!("Failed to insert maintenance record: {}", e))
        })?;

        Ok(result)
    }

    /// Get a maintenance record by ID.
    pub async fn get_maintenance_record(&self, id: Uuid) -> AppResult<Option<record::Model>> {
        let result = MaintenanceRecord::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get maintenance record: {}", e)))?;

        Ok(result)
    }

    /// Records of one bridge, latest scheduled date first.
    pub async fn list_maintenance_for_bridge(
        &self,
        bridge_id: Uuid,
        limit: Option<u64>,
    ) -> AppResult<Vec<record::Model>> {
        let result = MaintenanceRecord::find()
            .filter(record::Column::BridgeId.eq(bridge_id))
            .order_by_desc(record::Column::ScheduledDate)
            .order_by_desc(record::Column::CreatedAt)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to list maintenance records: {}", e))
            })?;

        Ok(result)
    }

    /// All maintenance records.
    pub async fn list_maintenance_records(&self) -> AppResult<Vec<record::Model>> {
        let result = MaintenanceRecord::find()
            .order_by_desc(record::Column::ScheduledDate)
            .all(self.connection())
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to list maintenance records: {}", e))
            })?;

        Ok(result)
    }

    /// Replace the editable fields of a record. The owning bridge and
    /// creation time never change.
    pub async fn update_maintenance_record(
        &self,
        id: Uuid,
        req: &MaintenanceRequest,
    ) -> AppResult<record::Model> {
        let existing = self
            .get_maintenance_record(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance record {}", id)))?;

        let mut active: ActiveModel = existing.into();
        active.action_type = Set(req.action_type.as_str().to_string());
        active.description = Set(req.description.trim().to_string());
        active.scheduled_date = Set(req.scheduled_date);
        active.completed_date = Set(req.completed_date);
        active.cost = Set(req.cost);
        active.is_completed = Set(req.is_completed);

        let result = active.update(self.connection()).await.map_err(|e| {
            AppError::Database(format!("Failed to update maintenance record: {}", e))
        })?;

        Ok(result)
    }

    /// Delete a maintenance record. Returns false when it did not exist.
    pub async fn delete_maintenance_record(&self, id: Uuid) -> AppResult<bool> {
        let Some(existing) = self.get_maintenance_record(id).await? else {
            return Ok(false);
        };

        let result = existing.delete(self.connection()).await.map_err(|e| {
            AppError::Database(format!("Failed to delete maintenance record: {}", e))
        })?;

        Ok(result.rows_affected > 0)
    }
}
