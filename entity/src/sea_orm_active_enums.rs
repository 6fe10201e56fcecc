//! Enumerations stored as their upper snake case names.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[sea_orm(string_value = "PILOT")]
    Pilot,
    #[sea_orm(string_value = "FLEET_MANAGER")]
    FleetManager,
    #[sea_orm(string_value = "ADMIN")]
    Admin,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AircraftCategory {
    #[sea_orm(string_value = "SINGLE_ENGINE_LAND")]
    SingleEngineLand,
    #[sea_orm(string_value = "MULTI_ENGINE_LAND")]
    MultiEngineLand,
    #[sea_orm(string_value = "SINGLE_ENGINE_SEA")]
    SingleEngineSea,
    #[sea_orm(string_value = "MULTI_ENGINE_SEA")]
    MultiEngineSea,
    #[sea_orm(string_value = "HELICOPTER")]
    Helicopter,
    #[sea_orm(string_value = "GLIDER")]
    Glider,
    #[sea_orm(string_value = "TURBOPROP")]
    Turboprop,
    #[sea_orm(string_value = "JET")]
    Jet,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AircraftStatus {
    #[sea_orm(string_value = "AIRWORTHY")]
    Airworthy,
    #[sea_orm(string_value = "GROUNDED")]
    Grounded,
    #[sea_orm(string_value = "MAINTENANCE")]
    Maintenance,
}

/// Meteorological conditions a flight was conducted in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum WeatherCondition {
    /// Visual meteorological conditions
    #[sea_orm(string_value = "VMC")]
    #[serde(rename = "VMC")]
    Vmc,
    /// Instrument meteorological conditions
    #[sea_orm(string_value = "IMC")]
    #[serde(rename = "IMC")]
    Imc,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum FlightRule {
    #[sea_orm(string_value = "VFR")]
    #[serde(rename = "VFR")]
    Vfr,
    #[sea_orm(string_value = "IFR")]
    #[serde(rename = "IFR")]
    Ifr,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceCheckType {
    #[sea_orm(string_value = "ANNUAL")]
    Annual,
    #[sea_orm(string_value = "HUNDRED_HOUR")]
    HundredHour,
    #[sea_orm(string_value = "FIFTY_HOUR")]
    FiftyHour,
    #[sea_orm(string_value = "PHASE")]
    Phase,
    #[sea_orm(string_value = "UNSCHEDULED")]
    Unscheduled,
    /// Airworthiness directive compliance
    #[sea_orm(string_value = "AD_COMPLIANCE")]
    AdCompliance,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatus {
    #[sea_orm(string_value = "DUE")]
    Due,
    #[sea_orm(string_value = "OVERDUE")]
    Overdue,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}
