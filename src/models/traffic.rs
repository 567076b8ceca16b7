//! Traffic snapshot models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::traffic_data;
use crate::error::{AppError, AppResult, FieldError};

/// Request body for the traffic upsert.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TrafficRequest {
    /// Daily heavy-vehicle count
    #[serde(default)]
    pub heavy_vehicles: i32,
    /// Daily small-vehicle count
    #[serde(default)]
    pub small_vehicles: i32,
}

impl TrafficRequest {
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();
        if self.heavy_vehicles < 0 {
            errors.push(FieldError::new(
                "heavy_vehicles",
                "Vehicle counts cannot be negative.",
            ));
        }
        if self.small_vehicles < 0 {
            errors.push(FieldError::new(
                "small_vehicles",
                "Vehicle counts cannot be negative.",
            ));
        }
        AppError::from_field_errors(errors)
    }
}

/// Which branch of the upsert ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    Created,
    Updated,
}

impl UpsertOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Created => "Traffic data created successfully!",
            Self::Updated => "Traffic data updated successfully!",
        }
    }
}

/// Traffic snapshot as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrafficResponse {
    pub bridge_id: Uuid,
    pub heavy_vehicles: i32,
    pub small_vehicles: i32,
    pub total_vehicles: i64,
    pub recorded_date: NaiveDate,
}

impl From<&traffic_data::Model> for TrafficResponse {
    fn from(model: &traffic_data::Model) -> Self {
        TrafficResponse {
            bridge_id: model.bridge_id,
            heavy_vehicles: model.heavy_vehicles,
            small_vehicles: model.small_vehicles,
            total_vehicles: model.total_vehicles(),
            recorded_date: model.recorded_date,
        }
    }
}

/// Response for the traffic upsert.
#[derive(Debug, Serialize, ToSchema)]
pub struct TrafficUpsertResponse {
    pub outcome: UpsertOutcome,
    pub message: String,
    /// Bridge detail path to show next
    pub redirect_to: String,
    pub traffic: TrafficResponse,
}
