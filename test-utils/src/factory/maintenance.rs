//! Maintenance record factory for creating test maintenance records.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{MaintenanceCheckType, MaintenanceStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct MaintenanceFactory<'a> {
    db: &'a DatabaseConnection,
    aircraft_id: Uuid,
    check_type: MaintenanceCheckType,
    status: MaintenanceStatus,
    scheduled_date: NaiveDate,
    hours_at_check: f64,
    next_due_hours: Option<f64>,
    next_due_date: Option<NaiveDate>,
}

impl<'a> MaintenanceFactory<'a> {
    /// Creates a new MaintenanceFactory with default values.
    ///
    /// Defaults to a completed annual inspection scheduled today with no next due
    /// hours or date.
    pub fn new(db: &'a DatabaseConnection, aircraft_id: Uuid) -> Self {
        Self {
            db,
            aircraft_id,
            check_type: MaintenanceCheckType::Annual,
            status: MaintenanceStatus::Completed,
            scheduled_date: Utc::now().date_naive(),
            hours_at_check: 1000.0,
            next_due_hours: None,
            next_due_date: None,
        }
    }

    pub fn check_type(mut self, check_type: MaintenanceCheckType) -> Self {
        self.check_type = check_type;
        self
    }

    pub fn status(mut self, status: MaintenanceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn scheduled_date(mut self, scheduled_date: NaiveDate) -> Self {
        self.scheduled_date = scheduled_date;
        self
    }

    pub fn next_due_hours(mut self, next_due_hours: Option<f64>) -> Self {
        self.next_due_hours = next_due_hours;
        self
    }

    pub fn next_due_date(mut self, next_due_date: Option<NaiveDate>) -> Self {
        self.next_due_date = next_due_date;
        self
    }

    /// Builds and inserts the maintenance record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::maintenance_record::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::maintenance_record::Model, DbErr> {
        let now = Utc::now();
        entity::maintenance_record::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            aircraft_id: ActiveValue::Set(self.aircraft_id),
            check_type: ActiveValue::Set(self.check_type),
            status: ActiveValue::Set(self.status),
            scheduled_date: ActiveValue::Set(self.scheduled_date),
            completed_date: ActiveValue::Set(None),
            hours_at_check: ActiveValue::Set(self.hours_at_check),
            next_due_hours: ActiveValue::Set(self.next_due_hours),
            next_due_date: ActiveValue::Set(self.next_due_date),
            technician: ActiveValue::Set(None),
            squawks: ActiveValue::Set(None),
            cost: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a completed annual inspection for the aircraft.
pub async fn create_maintenance_record(
    db: &DatabaseConnection,
    aircraft_id: Uuid,
) -> Result<entity::maintenance_record::Model, DbErr> {
    MaintenanceFactory::new(db, aircraft_id).build().await
}
