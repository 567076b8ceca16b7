//! Maintenance record entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub bridge_id: Uuid,
    pub action_type: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub scheduled_date: Date,
    pub completed_date: Option<Date>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub cost: Option<Decimal>,
    pub is_completed: bool,
    pub created_at: DateTimeUtc,
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
