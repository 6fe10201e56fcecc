//! Aircraft domain models, parameters, and derived fleet views.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{
    AircraftCategory, AircraftStatus, MaintenanceCheckType, MaintenanceStatus,
};
use uuid::Uuid;

use crate::model::aircraft::{
    AircraftDto, AircraftRequestDto, FleetStatsDto, MaintenanceAlertDto, UrgencyDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
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

impl Aircraft {
    /// Converts an entity model to an aircraft domain model at the repository boundary.
    pub fn from_entity(entity: entity::aircraft::Model) -> Self {
        Self {
            id: entity.id,
            tail_number: entity.tail_number,
            make: entity.make,
            model: entity.model_name,
            year: entity.year,
            category: entity.category,
            total_airframe_hours: entity.total_airframe_hours,
            status: entity.status,
            engine_count: entity.engine_count,
            max_passengers: entity.max_passengers,
            owner_id: entity.owner_id,
            image_url: entity.image_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AircraftDto {
        AircraftDto {
            id: self.id,
            tail_number: self.tail_number,
            make: self.make,
            model: self.model,
            year: self.year,
            category: self.category,
            total_airframe_hours: self.total_airframe_hours,
            status: self.status,
            engine_count: self.engine_count,
            max_passengers: self.max_passengers,
            owner_id: self.owner_id,
            image_url: self.image_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Every mutable aircraft field, used for both create and full-replace update.
///
/// `owner_id` holds the requested owner until the service resolves it; an owner which
/// does not exist is stored as `None`.
#[derive(Debug, Clone)]
pub struct AircraftParams {
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
}

impl AircraftParams {
    pub fn from_dto(dto: AircraftRequestDto) -> Self {
        Self {
            tail_number: dto.tail_number,
            make: dto.make,
            model: dto.model,
            year: dto.year,
            category: dto.category,
            total_airframe_hours: dto.total_airframe_hours,
            status: dto.status,
            engine_count: dto.engine_count,
            max_passengers: dto.max_passengers,
            owner_id: dto.owner_id,
            image_url: dto.image_url,
        }
    }
}

/// Fleet-wide counters computed from every aircraft and maintenance record.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetStats {
    pub total_aircraft: u64,
    pub airworthy_count: u64,
    pub grounded_count: u64,
    pub maintenance_count: u64,
    pub overdue_checks: u64,
    pub due_soon_checks: u64,
    pub total_fleet_hours: f64,
}

impl FleetStats {
    pub fn into_dto(self) -> FleetStatsDto {
        FleetStatsDto {
            total_aircraft: self.total_aircraft,
            airworthy_count: self.airworthy_count,
            grounded_count: self.grounded_count,
            maintenance_count: self.maintenance_count,
            overdue_checks: self.overdue_checks,
            due_soon_checks: self.due_soon_checks,
            total_fleet_hours: self.total_fleet_hours,
        }
    }
}

/// Severity of a pending maintenance check, ordered most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Urgency {
    Critical,
    Warning,
    Info,
}

impl Urgency {
    pub fn into_dto(self) -> UrgencyDto {
        match self {
            Self::Critical => UrgencyDto::Critical,
            Self::Warning => UrgencyDto::Warning,
            Self::Info => UrgencyDto::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceAlert {
    pub aircraft_id: Uuid,
    pub tail_number: String,
    pub check_type: MaintenanceCheckType,
    pub status: MaintenanceStatus,
    pub days_until_due: i64,
    pub hours_until_due: f64,
    pub urgency: Urgency,
}

impl MaintenanceAlert {
    pub fn into_dto(self) -> MaintenanceAlertDto {
        MaintenanceAlertDto {
            aircraft_id: self.aircraft_id,
            tail_number: self.tail_number,
            check_type: self.check_type,
            status: self.status,
            days_until_due: self.days_until_due,
            hours_until_due: self.hours_until_due,
            urgency: self.urgency.into_dto(),
        }
    }
}
