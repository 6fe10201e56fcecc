//! Maintenance record domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{MaintenanceCheckType, MaintenanceStatus};
use uuid::Uuid;

use crate::model::maintenance::{MaintenanceDto, MaintenanceRequestDto};

/// Maintenance check scheduled or performed on an aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub aircraft_id: Uuid,
    /// Tail number of the aircraft, joined at the repository boundary.
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

impl MaintenanceRecord {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The maintenance record entity from the database
    /// - `aircraft` - The aircraft the record belongs to, if it was loaded
    pub fn from_entity(
        entity: entity::maintenance_record::Model,
        aircraft: Option<&entity::aircraft::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            aircraft_id: entity.aircraft_id,
            aircraft_tail_number: aircraft.map(|a| a.tail_number.clone()).unwrap_or_default(),
            check_type: entity.check_type,
            status: entity.status,
            scheduled_date: entity.scheduled_date,
            completed_date: entity.completed_date,
            hours_at_check: entity.hours_at_check,
            next_due_hours: entity.next_due_hours,
            next_due_date: entity.next_due_date,
            technician: entity.technician,
            squawks: entity.squawks,
            cost: entity.cost,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MaintenanceDto {
        MaintenanceDto {
            id: self.id,
            aircraft_id: self.aircraft_id,
            aircraft_tail_number: self.aircraft_tail_number,
            check_type: self.check_type,
            status: self.status,
            scheduled_date: self.scheduled_date,
            completed_date: self.completed_date,
            hours_at_check: self.hours_at_check,
            next_due_hours: self.next_due_hours,
            next_due_date: self.next_due_date,
            technician: self.technician,
            squawks: self.squawks,
            cost: self.cost,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Every mutable maintenance field, used for both create and full-replace update.
#[derive(Debug, Clone)]
pub struct MaintenanceParams {
    pub aircraft_id: Uuid,
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
}

impl MaintenanceParams {
    pub fn from_dto(dto: MaintenanceRequestDto) -> Self {
        Self {
            aircraft_id: dto.aircraft_id,
            check_type: dto.check_type,
            status: dto.status,
            scheduled_date: dto.scheduled_date,
            completed_date: dto.completed_date,
            hours_at_check: dto.hours_at_check,
            next_due_hours: dto.next_due_hours,
            next_due_date: dto.next_due_date,
            technician: dto.technician,
            squawks: dto.squawks,
            cost: dto.cost,
            notes: dto.notes,
        }
    }
}
