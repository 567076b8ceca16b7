//! Bridge domain models and DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entity::bridge;
use crate::error::{AppError, AppResult, FieldError};

use super::condition::{ConditionRatings, ConditionSummary};
use super::maintenance::MaintenanceRecordResponse;
use super::traffic::TrafficResponse;
use super::Pagination;

/// Maximum length of a bridge name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Structural type of a bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BridgeType {
    BeamComposite,
    Suspension,
    Arch,
    Truss,
}

impl BridgeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeamComposite => "beam_composite",
            Self::Suspension => "suspension",
            Self::Arch => "arch",
            Self::Truss => "truss",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "beam_composite" => Some(Self::BeamComposite),
            "suspension" => Some(Self::Suspension),
            "arch" => Some(Self::Arch),
            "truss" => Some(Self::Truss),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BeamComposite => "Beam Composite Bridge",
            Self::Suspension => "Suspension Bridge",
            Self::Arch => "Arch Bridge",
            Self::Truss => "Truss Bridge",
        }
    }
}

/// Primary construction material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    SteelConcrete,
    Concrete,
    Steel,
}

impl Material {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SteelConcrete => "steel_concrete",
            Self::Concrete => "concrete",
            Self::Steel => "steel",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "steel_concrete" => Some(Self::SteelConcrete),
            "concrete" => Some(Self::Concrete),
            "steel" => Some(Self::Steel),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SteelConcrete => "Steel and Concrete",
            Self::Concrete => "Concrete",
            Self::Steel => "Steel",
        }
    }
}

/// Request body for creating or replacing a bridge.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BridgeRequest {
    pub name: String,
    pub bridge_type: BridgeType,
    /// Length in metres
    pub length: Decimal,
    /// Width in metres
    pub width: Decimal,
    pub lanes: i32,
    pub material: Material,
    pub year_built: i32,
    /// Route description
    pub route: String,
    /// GPS coordinates as free text
    pub gps_coordinates: String,
    #[serde(default)]
    pub deck_rating: Option<i32>,
    #[serde(default)]
    pub girders_rating: Option<i32>,
    #[serde(default)]
    pub piers_rating: Option<i32>,
    #[serde(default)]
    pub abutment_rating: Option<i32>,
    #[serde(default)]
    pub condition_notes: Option<String>,
}

impl BridgeRequest {
    /// Check every field constraint, reporting all failures at once.
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required."));
        } else if name.chars().count() > MAX_NAME_LENGTH {
            errors.push(FieldError::new(
                "name",
                format!("Name must be at most {} characters.", MAX_NAME_LENGTH),
            ));
        }

        // NUMERIC(6,3) and NUMERIC(5,2) column limits
        if self.length <= Decimal::ZERO {
            errors.push(FieldError::new("length", "Length must be positive."));
        } else if self.length >= Decimal::new(1000, 0) || self.length.scale() > 3 {
            errors.push(FieldError::new(
                "length",
                "Length must be below 1000 m with at most 3 decimal places.",
            ));
        }
        if self.width <= Decimal::ZERO {
            errors.push(FieldError::new("width", "Width must be positive."));
        } else if self.width >= Decimal::new(1000, 0) || self.width.scale() > 2 {
            errors.push(FieldError::new(
                "width",
                "Width must be below 1000 m with at most 2 decimal places.",
            ));
        }

        if self.lanes < 1 {
            errors.push(FieldError::new("lanes", "A bridge must have at least 1 lane."));
        }
        if self.year_built < 0 {
            errors.push(FieldError::new("year_built", "Year built cannot be negative."));
        }
        if self.route.trim().is_empty() {
            errors.push(FieldError::new("route", "Route is required."));
        }
        if self.gps_coordinates.trim().is_empty() {
            errors.push(FieldError::new(
                "gps_coordinates",
                "GPS coordinates are required.",
            ));
        }

        for (field, rating) in [
            ("deck_rating", self.deck_rating),
            ("girders_rating", self.girders_rating),
            ("piers_rating", self.piers_rating),
            ("abutment_rating", self.abutment_rating),
        ] {
            if let Some(value) = rating
                && !(1..=5).contains(&value)
            {
                errors.push(FieldError::new(field, "Rating must be between 1 and 5."));
            }
        }

        AppError::from_field_errors(errors)
    }

    pub fn ratings(&self) -> ConditionRatings {
        ConditionRatings::new(
            self.deck_rating,
            self.girders_rating,
            self.piers_rating,
            self.abutment_rating,
        )
    }

    /// Notes with blank input normalised to absent.
    pub fn normalized_notes(&self) -> Option<String> {
        self.condition_notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
            .map(str::to_string)
    }
}

/// Query parameters for the bridge list.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBridgesQuery {
    /// Case-insensitive match against name or route
    pub search: Option<String>,
    /// Condition category key, e.g. `VERY_GOOD`
    pub condition: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Bridge row in list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BridgeSummary {
    pub id: Uuid,
    pub name: String,
    pub bridge_type: String,
    pub bridge_type_label: &'static str,
    pub material: String,
    pub length: Decimal,
    pub width: Decimal,
    pub lanes: i32,
    pub year_built: i32,
    pub route: String,
    pub condition: ConditionSummary,
    pub updated_at: DateTime<Utc>,
}

impl From<&bridge::Model> for BridgeSummary {
    fn from(model: &bridge::Model) -> Self {
        BridgeSummary {
            id: model.id,
            name: model.name.clone(),
            bridge_type: model.bridge_type.clone(),
            bridge_type_label: type_label(&model.bridge_type),
            material: model.material.clone(),
            length: model.length,
            width: model.width,
            lanes: model.lanes,
            year_built: model.year_built,
            route: model.route.clone(),
            condition: ConditionSummary::from_ratings(&model.ratings()),
            updated_at: model.updated_at,
        }
    }
}

/// Bridge list response.
#[derive(Debug, Serialize, ToSchema)]
pub struct BridgeListResponse {
    pub bridges: Vec<BridgeSummary>,
    pub pagination: Pagination,
    /// Count of all bridges, ignoring filters
    pub total_bridges: u64,
    pub search_query: String,
    pub condition_filter: String,
}

/// Full bridge view with condition, traffic and latest maintenance.
#[derive(Debug, Serialize, ToSchema)]
pub struct BridgeDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub bridge_type: String,
    pub bridge_type_label: &'static str,
    pub material: String,
    pub material_label: &'static str,
    pub length: Decimal,
    pub width: Decimal,
    pub lanes: i32,
    pub year_built: i32,
    pub route: String,
    pub gps_coordinates: String,
    pub ratings: ConditionRatings,
    pub condition: ConditionSummary,
    pub condition_notes: Option<String>,
    pub traffic: Option<TrafficResponse>,
    /// Five latest records by scheduled date
    pub maintenance_records: Vec<MaintenanceRecordResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BridgeDetailResponse {
    pub fn new(
        model: &bridge::Model,
        traffic: Option<TrafficResponse>,
        maintenance_records: Vec<MaintenanceRecordResponse>,
    ) -> Self {
        let ratings = model.ratings();
        BridgeDetailResponse {
            id: model.id,
            name: model.name.clone(),
            bridge_type: model.bridge_type.clone(),
            bridge_type_label: type_label(&model.bridge_type),
            material: model.material.clone(),
            material_label: material_label(&model.material),
            length: model.length,
            width: model.width,
            lanes: model.lanes,
            year_built: model.year_built,
            route: model.route.clone(),
            gps_coordinates: model.gps_coordinates.clone(),
            ratings,
            condition: ConditionSummary::from_ratings(&ratings),
            condition_notes: model.condition_notes.clone(),
            traffic,
            maintenance_records,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Response for bridge create/update.
#[derive(Debug, Serialize, ToSchema)]
pub struct BridgeMutationResponse {
    pub message: String,
    pub bridge: BridgeSummary,
}

fn type_label(raw: &str) -> &'static str {
    BridgeType::parse(raw).map_or("Unknown", |t| t.display_name())
}

fn material_label(raw: &str) -> &'static str {
    Material::parse(raw).map_or("Unknown", |m| m.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn valid_request() -> BridgeRequest {
        BridgeRequest {
            name: "Bridge 1".to_string(),
            bridge_type: BridgeType::BeamComposite,
            length: Decimal::new(46_158, 3),
            width: Decimal::new(125, 1),
            lanes: 3,
            material: Material::SteelConcrete,
            year_built: 2024,
            route: "CITY-MASVINGO ROAD WITH AN UNDERPASS".to_string(),
            gps_coordinates: "X=-1593.793 Y=-1981906.781".to_string(),
            deck_rating: Some(5),
            girders_rating: Some(5),
            piers_rating: Some(1),
            abutment_rating: Some(2),
            condition_notes: None,
        }
    }

    fn field_names(result: AppResult<()>) -> Vec<String> {
        match result {
            Err(AppError::Validation(errors)) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_zero_lanes_rejected() {
        let mut req = valid_request();
        req.lanes = 0;
        assert_eq!(field_names(req.validate()), vec!["lanes"]);
    }

    #[test]
    fn test_out_of_range_ratings_rejected() {
        let mut req = valid_request();
        req.deck_rating = Some(0);
        req.abutment_rating = Some(6);
        assert_eq!(
            field_names(req.validate()),
            vec!["deck_rating", "abutment_rating"]
        );
    }

    #[test]
    fn test_unset_ratings_allowed() {
        let mut req = valid_request();
        req.deck_rating = None;
        req.girders_rating = None;
        req.piers_rating = None;
        req.abutment_rating = None;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_dimensions_must_be_positive_and_fit_columns() {
        let mut req = valid_request();
        req.length = Decimal::ZERO;
        req.width = Decimal::new(1234, 3);
        assert_eq!(field_names(req.validate()), vec!["length", "width"]);
    }

    #[test]
    fn test_blank_name_and_route_rejected() {
        let mut req = valid_request();
        req.name = "   ".to_string();
        req.route = String::new();
        assert_eq!(field_names(req.validate()), vec!["name", "route"]);
    }

    #[test]
    fn test_request_deserializes_enum_keys() {
        let req: BridgeRequest = serde_json::from_value(serde_json::json!({
            "name": "Bridge 9",
            "bridge_type": "truss",
            "length": 60.213,
            "width": 12.5,
            "lanes": 2,
            "material": "steel",
            "year_built": 1998,
            "route": "GLEN NORAH-CHITUNGWIZA",
            "gps_coordinates": "X=-1795.167 Y=-1981782.345"
        }))
        .unwrap();

        assert_eq!(req.bridge_type, BridgeType::Truss);
        assert_eq!(req.material, Material::Steel);
        assert_eq!(req.ratings(), ConditionRatings::default());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_blank_notes_normalised() {
        let mut req = valid_request();
        req.condition_notes = Some("  ".to_string());
        assert_eq!(req.normalized_notes(), None);
        req.condition_notes = Some(" cracked deck ".to_string());
        assert_eq!(req.normalized_notes().as_deref(), Some("cracked deck"));
    }

    #[test]
    fn test_enum_labels() {
        assert_eq!(BridgeType::BeamComposite.display_name(), "Beam Composite Bridge");
        assert_eq!(Material::SteelConcrete.display_name(), "Steel and Concrete");
        assert_eq!(type_label("catenary"), "Unknown");
        assert_eq!(
            BridgeType::parse(BridgeType::Arch.as_str()),
            Some(BridgeType::Arch)
        );
    }
}
