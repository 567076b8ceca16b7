//! Traffic snapshot entity (one per bridge).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "traffic_data")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub bridge_id: Uuid,
    pub heavy_vehicles: i32,
    pub small_vehicles: i32,
    pub recorded_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bridge::Entity",
        from = "Column::BridgeId",
        to = "super::bridge::Column::Id",
        on_delete = "Cascade"
    )]
    Bridge,
}

impl Related<super::bridge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bridge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn total_vehicles(&self) -> i64 {
        i64::from(self.heavy_vehicles) + i64::from(self.small_vehicles)
    }
}
