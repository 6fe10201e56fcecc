use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{FlightRule, WeatherCondition};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "flight_log_entry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub pilot_id: Uuid,
    pub aircraft_id: Uuid,
    pub date: Date,
    pub departure_airport: String,
    pub arrival_airport: String,
    #[sea_orm(column_type = "Double")]
    pub total_flight_time: f64,
    #[sea_orm(column_type = "Double")]
    pub pic_time: f64,
    #[sea_orm(column_type = "Double")]
    pub sic_time: f64,
    #[sea_orm(column_type = "Double")]
    pub dual_received_time: f64,
    #[sea_orm(column_type = "Double")]
    pub solo_time: f64,
    #[sea_orm(column_type = "Double")]
    pub night_time: f64,
    #[sea_orm(column_type = "Double")]
    pub ifr_time: f64,
    #[sea_orm(column_type = "Double")]
    pub cross_country_time: f64,
    pub day_landings: i32,
    pub night_landings: i32,
    pub weather_condition: WeatherCondition,
    pub flight_rule: FlightRule,
    #[sea_orm(column_type = "Text", nullable)]
    pub remarks: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub simulator_time: Option<f64>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PilotId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::aircraft::Entity",
        from = "Column::AircraftId",
        to = "super::aircraft::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Aircraft,
    #[sea_orm(has_many = "super::flight_approach_type::Entity")]
    FlightApproachType,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::aircraft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircraft.def()
    }
}

impl Related<super::flight_approach_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FlightApproachType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
