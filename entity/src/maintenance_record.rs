use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{MaintenanceCheckType, MaintenanceStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance_record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub aircraft_id: Uuid,
    pub check_type: MaintenanceCheckType,
    pub status: MaintenanceStatus,
    pub scheduled_date: Date,
    pub completed_date: Option<Date>,
    #[sea_orm(column_type = "Double")]
    pub hours_at_check: f64,
    #[sea_orm(column_type = "Double", nullable)]
    pub next_due_hours: Option<f64>,
    pub next_due_date: Option<Date>,
    pub technician: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub squawks: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub cost: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aircraft::Entity",
        from = "Column::AircraftId",
        to = "super::aircraft::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Aircraft,
}

impl Related<super::aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircraft.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
