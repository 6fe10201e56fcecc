use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{MaintenanceCheckType, MaintenanceStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, Validate, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequestDto {
    pub aircraft_id: Uuid,
    pub check_type: MaintenanceCheckType,
    pub status: MaintenanceStatus,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    #[validate(range(min = 0.0))]
    pub hours_at_check: f64,
    #[serde(default)]
    pub next_due_hours: Option<f64>,
    #[serde(default)]
    pub next_due_date: Option<NaiveDate>,
    #[serde(default)]
    pub technician: Option<String>,
    #[serde(default)]
    pub squawks: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceDto {
    pub id: Uuid,
    pub aircraft_id: Uuid,
    pub aircraft_tail_number: String,
    pub check_type: MaintenanceCheckType,
    pub status: MaintenanceStatus,
    pub scheduled_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    pub hours_at_check: f64,
    pub next_due_hours: Option<f64>,
    pub next_due_date: Option<NaiveDate>,
    pub technician: Option<String>,
    pub squawks: Option<String>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
