//! Maintenance record models and DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::maintenance_record;
use crate::error::{AppError, AppResult, FieldError};

/// Kind of maintenance action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    MinorRepair,
    Routine,
    Monitoring,
    MajorRepair,
    Inspection,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MinorRepair => "minor_repair",
            Self::Routine => "routine",
            Self::Monitoring => "monitoring",
            Self::MajorRepair => "major_repair",
            Self::Inspection => "inspection",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "minor_repair" => Some(Self::MinorRepair),
            "routine" => Some(Self::Routine),
            "monitoring" => Some(Self::Monitoring),
            "major_repair" => Some(Self::MajorRepair),
            "inspection" => Some(Self::Inspection),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MinorRepair => "Minor Repairs",
            Self::Routine => "Routine Maintenance",
            Self::Monitoring => "Normal Monitoring",
            Self::MajorRepair => "Major Repairs",
            Self::Inspection => "Inspection",
        }
    }
}

/// Request body for creating or replacing a maintenance record.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MaintenanceRequest {
    pub action_type: ActionType,
    pub description: String,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    #[serde(default)]
    pub cost: Option<Decimal>,
    #[serde(default)]
    pub is_completed: bool,
}

impl MaintenanceRequest {
    /// Enforce the completion flag/date pairing and date ordering.
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();

        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "Description is required."));
        }

        if let Some(cost) = self.cost {
            if cost < Decimal::ZERO {
                errors.push(FieldError::new("cost", "Cost cannot be negative."));
            } else if cost.scale() > 2 || cost >= Decimal::new(100_000_000, 0) {
                errors.push(FieldError::new(
                    "cost",
                    "Cost must be below 100,000,000 with at most 2 decimal places.",
                ));
            }
        }

        if self.is_completed && self.completed_date.is_none() {
            errors.push(FieldError::new(
                "completed_date",
                "A completed maintenance action must have a completion date.",
            ));
        }

        if self.completed_date.is_some() && !self.is_completed {
            errors.push(FieldError::new(
                "is_completed",
                "If a completion date is set, the action must be marked as completed.",
            ));
        }

        if let Some(completed) = self.completed_date
            && completed < self.scheduled_date
        {
            errors.push(FieldError::new(
                "completed_date",
                "Completion date cannot be before the scheduled date.",
            ));
        }

        AppError::from_field_errors(errors)
    }
}

/// Maintenance record as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MaintenanceRecordResponse {
    pub id: Uuid,
    pub bridge_id: Uuid,
    pub action_type: String,
    pub action_label: &'static str,
    pub description: String,
    pub scheduled_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    pub cost: Option<Decimal>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&maintenance_record::Model> for MaintenanceRecordResponse {
    fn from(model: &maintenance_record::Model) -> Self {
        MaintenanceRecordResponse {
            id: model.id,
            bridge_id: model.bridge_id,
            action_type: model.action_type.clone(),
            action_label: ActionType::parse(&model.action_type)
                .map_or("Unknown", |a| a.display_name()),
            description: model.description.clone(),
            scheduled_date: model.scheduled_date,
            completed_date: model.completed_date,
            cost: model.cost,
            is_completed: model.is_completed,
            created_at: model.created_at,
        }
    }
}

/// Maintenance list for one bridge.
#[derive(Debug, Serialize, ToSchema)]
pub struct MaintenanceListResponse {
    pub bridge_id: Uuid,
    pub bridge_name: String,
    pub records: Vec<MaintenanceRecordResponse>,
}

/// Response for maintenance create/update/delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct MaintenanceMutationResponse {
    pub message: String,
    /// Bridge detail path to show next
    pub redirect_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<MaintenanceRecordResponse>,
}
