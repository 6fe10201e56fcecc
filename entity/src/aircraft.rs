use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{AircraftCategory, AircraftStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub tail_number: String,
    pub make: String,
    #[sea_orm(column_name = "model")]
    pub model_name: String,
    pub year: i32,
    pub category: AircraftCategory,
    #[sea_orm(column_type = "Double")]
    pub total_airframe_hours: f64,
    pub status: AircraftStatus,
    pub engine_count: i32,
    pub max_passengers: i32,
    pub owner_id: Option<Uuid>,
    pub image_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(has_many = "super::flight_log_entry::Entity")]
    FlightLogEntry,
    #[sea_orm(has_many = "super::maintenance_record::Entity")]
    MaintenanceRecord,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::flight_log_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightLogEntry.def()
    }
}

impl Related<super::maintenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
