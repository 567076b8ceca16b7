//! Bridge entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::models::ConditionRatings;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bridges")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub bridge_type: String,
    #[sea_orm(column_type = "Decimal(Some((6, 3)))")]
    pub length: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub width: Decimal,
    pub lanes: i32,
    pub material: String,
    pub year_built: i32,
    #[sea_orm(column_type = "Text")]
    pub route: String,
    #[sea_orm(column_type = "Text")]
    pub gps_coordinates: String,
    pub deck_rating: Option<i32>,
    pub girders_rating: Option<i32>,
    pub piers_rating: Option<i32>,
    pub abutment_rating: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub condition_notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::traffic_data::Entity")]
    TrafficData,
    #[sea_orm(has_many = "super::maintenance_record::Entity")]
    MaintenanceRecords,
}

impl Related<super::traffic_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrafficData.def()
    }
}

impl Related<super::maintenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The four component ratings as a value snapshot.
    pub fn ratings(&self) -> ConditionRatings {
        ConditionRatings {
            deck: self.deck_rating,
            girders: self.girders_rating,
            piers: self.piers_rating,
            abutment: self.abutment_rating,
        }
    }
}
