//! Database queries for traffic snapshots.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr};
use uuid::Uuid;

use crate::entity::traffic_data::{self as traffic, ActiveModel, Entity as TrafficData};
use crate::error::{AppError, AppResult};
use crate::models::{TrafficRequest, UpsertOutcome};

use super::DbPool;

impl DbPool {
    /// Get the traffic snapshot of a bridge, if any.
    pub async fn get_traffic_for_bridge(
        &self,
        bridge_id: Uuid,
    ) -> AppResult<Option<traffic::Model>> {
        let result = TrafficData::find()
            .filter(traffic::Column::BridgeId.eq(bridge_id))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get traffic data: {}", e)))?;

        Ok(result)
    }

    /// All traffic snapshots.
    pub async fn list_traffic(&self) -> AppResult<Vec<traffic::Model>> {
        let result = TrafficData::find()
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list traffic data: {}", e)))?;

        Ok(result)
    }

    /// Overwrite the bridge's snapshot if it has one, otherwise create it.
    ///
    /// `recorded_date` is set to today on both branches. When a concurrent
    /// writer creates the snapshot between the lookup and the insert, the
    /// insert's unique violation sends this call down the overwrite branch.
    pub async fn upsert_traffic(
        &self,
        bridge_id: Uuid,
        req: &TrafficRequest,
    ) -> AppResult<(UpsertOutcome, traffic::Model)> {
        let today = Utc::now().date_naive();

        if let Some(existing) = self.get_traffic_for_bridge(bridge_id).await? {
            let updated = self.overwrite_traffic(existing, req, today).await?;
            return Ok((UpsertOutcome::Updated, updated));
        }

        if let Some(created) = self.try_insert_traffic(bridge_id, req, today).await? {
            return Ok((UpsertOutcome::Created, created));
        }

        // Lost the create race; the row now exists unless the bridge went with it.
        let existing = self
            .get_traffic_for_bridge(bridge_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bridge {}", bridge_id)))?;
        let updated = self.overwrite_traffic(existing, req, today).await?;

        Ok((UpsertOutcome::Updated, updated))
    }

    async fn overwrite_traffic(
        &self,
        existing: traffic::Model,
        req: &TrafficRequest,
        today: NaiveDate,
    ) -> AppResult<traffic::Model> {
        let mut active: ActiveModel = existing.into();
        active.heavy_vehicles = Set(req.heavy_vehicles);
        active.small_vehicles = Set(req.small_vehicles);
        active.recorded_date = Set(today);

        active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update traffic data: {}", e)))
    }

    /// Insert a new snapshot. `None` when the bridge already has one.
    async fn try_insert_traffic(
        &self,
        bridge_id: Uuid,
        req: &TrafficRequest,
        today: NaiveDate,
    ) -> AppResult<Option<traffic::Model>> {
        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            bridge_id: Set(bridge_id),
            heavy_vehicles: Set(req.heavy_vehicles),
            small_vehicles: Set(req.small_vehicles),
            recorded_date: Set(today),
        };

        match model.insert(self.connection()).await {
            Ok(created) => Ok(Some(created)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(None)
            }
            Err(e) => Err(AppError::Database(format!(
                "Failed to insert traffic data: {}",
                e
            ))),
        }
    }

    /// Create a snapshot only when the bridge has none. Returns whether
    /// a row was written.
    pub async fn insert_traffic_if_absent(
        &self,
        bridge_id: Uuid,
        req: &TrafficRequest,
    ) -> AppResult<bool> {
        if self.get_traffic_for_bridge(bridge_id).await?.is_some() {
            return Ok(false);
        }

        let today = Utc::now().date_naive();
        Ok(self.try_insert_traffic(bridge_id, req, today).await?.is_some())
    }
}
