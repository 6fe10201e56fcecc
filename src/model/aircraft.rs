use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{
    AircraftCategory, AircraftStatus, MaintenanceCheckType, MaintenanceStatus,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::model::api::not_blank;

#[derive(Serialize, Deserialize, Validate, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AircraftRequestDto {
    #[validate(custom(function = "not_blank"))]
    pub tail_number: String,
    #[validate(custom(function = "not_blank"))]
    pub make: String,
    #[validate(custom(function = "not_blank"))]
    pub model: String,
    #[validate(range(min = 1900))]
    pub year: i32,
    pub category: AircraftCategory,
    #[validate(range(min = 0.0))]
    pub total_airframe_hours: f64,
    pub status: AircraftStatus,
    #[validate(range(min = 1))]
    pub engine_count: i32,
    #[validate(range(min = 1))]
    pub max_passengers: i32,
    #[serde(default)]
    pub owner_id: Option<Uuid>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AircraftDto {
    pub id: Uuid,
    pub tail_number: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub category: AircraftCategory,
    pub total_airframe_hours: f64,
    pub status: AircraftStatus,
    pub engine_count: i32,
    pub max_passengers: i32,
    pub owner_id: Option<Uuid>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FleetStatsDto {
    pub total_aircraft: u64,
    pub airworthy_count: u64,
    pub grounded_count: u64,
    pub maintenance_count: u64,
    pub overdue_checks: u64,
    pub due_soon_checks: u64,
    pub total_fleet_hours: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyDto {
    Critical,
    Warning,
    Info,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceAlertDto {
    pub aircraft_id: Uuid,
    pub tail_number: String,
    pub check_type: MaintenanceCheckType,
    pub status: MaintenanceStatus,
    /// Whole days until the check is due, `-999` when no due date is recorded.
    pub days_until_due: i64,
    /// Airframe hours until the check is due, `999.0` when no due hours are recorded.
    pub hours_until_due: f64,
    pub urgency: UrgencyDto,
}
