//! Aircraft management plus the fleet-wide views derived from aircraft and maintenance
//! records.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{AircraftStatus, MaintenanceStatus};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::{
    data::{aircraft::AircraftRepository, maintenance::MaintenanceRepository, user::UserRepository},
    error::{conflict_on_unique, AppError},
    model::{
        aircraft::{Aircraft, AircraftParams, FleetStats, MaintenanceAlert, Urgency},
        maintenance::MaintenanceRecord,
    },
    util::round::round1,
};

/// Maintenance statuses that still need attention and therefore raise alerts.
pub const ALERT_STATUSES: [MaintenanceStatus; 3] = [
    MaintenanceStatus::Due,
    MaintenanceStatus::Overdue,
    MaintenanceStatus::InProgress,
];

/// Days ahead of today within which a DUE check counts as due soon.
const DUE_SOON_DAYS: i64 = 30;

/// Reported in place of a day count when a check has no due date.
const NO_DUE_DATE_DAYS: i64 = -999;
/// Reported in place of an hour count when a check has no due hours.
const NO_DUE_HOURS: f64 = 999.0;

const TAIL_NUMBER_TAKEN: &str = "Tail number is already registered";

pub struct AircraftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AircraftService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Aircraft>, AppError> {
        Ok(AircraftRepository::new(self.db).get_all().await?)
    }

    /// Gets an aircraft by ID.
    ///
    /// # Returns
    /// - `Ok(Aircraft)` - The aircraft
    /// - `Err(AppError::NotFound)` - No aircraft with that ID
    pub async fn get(&self, id: Uuid) -> Result<Aircraft, AppError> {
        AircraftRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates an aircraft.
    ///
    /// An owner ID which does not match any user is stored as no owner rather than
    /// rejected.
    ///
    /// # Returns
    /// - `Ok(Aircraft)` - The created aircraft
    /// - `Err(AppError::Conflict)` - Tail number already registered
    pub async fn create(&self, params: AircraftParams) -> Result<Aircraft, AppError> {
        let repo = AircraftRepository::new(self.db);

        if repo.find_by_tail_number(&params.tail_number).await?.is_some() {
            return Err(AppError::Conflict(TAIL_NUMBER_TAKEN.to_string()));
        }

        let params = self.resolve_owner(params).await?;

        let aircraft = repo
            .create(params)
            .await
            .map_err(|e| conflict_on_unique(e, TAIL_NUMBER_TAKEN))?;

        tracing::info!("Created aircraft {} ({})", aircraft.id, aircraft.tail_number);

        Ok(aircraft)
    }

    /// Replaces every mutable field of an aircraft, re-resolving the owner.
    ///
    /// # Returns
    /// - `Ok(Aircraft)` - The updated aircraft
    /// - `Err(AppError::NotFound)` - No aircraft with that ID
    /// - `Err(AppError::Conflict)` - Tail number registered to another aircraft
    pub async fn update(&self, id: Uuid, params: AircraftParams) -> Result<Aircraft, AppError> {
        let repo = AircraftRepository::new(self.db);

        if repo
            .find_by_tail_number(&params.tail_number)
            .await?
            .is_some_and(|other| other.id != id)
        {
            return Err(AppError::Conflict(TAIL_NUMBER_TAKEN.to_string()));
        }

        let params = self.resolve_owner(params).await?;

        repo.update(id, params)
            .await
            .map_err(|e| conflict_on_unique(e, TAIL_NUMBER_TAKEN))?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes an aircraft together with its flight log entries and maintenance records.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !AircraftRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted aircraft {}", id);

        Ok(())
    }

    pub async fn fleet_stats(&self) -> Result<FleetStats, AppError> {
        let aircraft = AircraftRepository::new(self.db).get_all().await?;
        let records = MaintenanceRepository::new(self.db).get_all().await?;

        Ok(fleet_stats(&aircraft, &records, Utc::now().date_naive()))
    }

    pub async fn maintenance_alerts(&self) -> Result<Vec<MaintenanceAlert>, AppError> {
        let records = MaintenanceRepository::new(self.db)
            .get_by_statuses(&ALERT_STATUSES)
            .await?;

        let mut aircraft_ids: Vec<Uuid> = records.iter().map(|r| r.aircraft_id).collect();
        aircraft_ids.sort_unstable();
        aircraft_ids.dedup();

        let aircraft: HashMap<Uuid, Aircraft> = AircraftRepository::new(self.db)
            .get_by_ids(&aircraft_ids)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        Ok(maintenance_alerts(&records, &aircraft, Utc::now().date_naive()))
    }

    async fn resolve_owner(&self, mut params: AircraftParams) -> Result<AircraftParams, AppError> {
        if let Some(owner_id) = params.owner_id {
            if UserRepository::new(self.db).find_by_id(owner_id).await?.is_none() {
                tracing::debug!("Owner {} not found, storing aircraft without owner", owner_id);
                params.owner_id = None;
            }
        }

        Ok(params)
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Aircraft {} not found", id))
}

/// Computes fleet counters from every aircraft and maintenance record.
///
/// Aircraft with a status other than the three counted ones are included in the total
/// only. A DUE check counts as due soon when its due date is at most 30 days after
/// `today`, which includes due dates already in the past.
pub fn fleet_stats(
    aircraft: &[Aircraft],
    records: &[MaintenanceRecord],
    today: NaiveDate,
) -> FleetStats {
    let count_status =
        |status: AircraftStatus| aircraft.iter().filter(|a| a.status == status).count() as u64;

    let overdue_checks = records
        .iter()
        .filter(|r| r.status == MaintenanceStatus::Overdue)
        .count() as u64;

    let due_soon_checks = records
        .iter()
        .filter(|r| r.status == MaintenanceStatus::Due)
        .filter_map(|r| r.next_due_date)
        .filter(|due| (*due - today).num_days() <= DUE_SOON_DAYS)
        .count() as u64;

    FleetStats {
        total_aircraft: aircraft.len() as u64,
        airworthy_count: count_status(AircraftStatus::Airworthy),
        grounded_count: count_status(AircraftStatus::Grounded),
        maintenance_count: count_status(AircraftStatus::Maintenance),
        overdue_checks,
        due_soon_checks,
        total_fleet_hours: aircraft.iter().map(|a| a.total_airframe_hours).sum(),
    }
}

/// Builds alerts for records still needing attention, most urgent first.
///
/// Records outside [`ALERT_STATUSES`] or whose aircraft is missing from `aircraft` are
/// skipped. Alerts of equal urgency keep the order of `records`.
pub fn maintenance_alerts(
    records: &[MaintenanceRecord],
    aircraft: &HashMap<Uuid, Aircraft>,
    today: NaiveDate,
) -> Vec<MaintenanceAlert> {
    let mut alerts: Vec<MaintenanceAlert> = records
        .iter()
        .filter(|r| ALERT_STATUSES.contains(&r.status))
        .filter_map(|record| {
            let aircraft = aircraft.get(&record.aircraft_id)?;

            let days_until_due = record
                .next_due_date
                .map(|due| (due - today).num_days())
                .unwrap_or(NO_DUE_DATE_DAYS);
            let hours_until_due = record
                .next_due_hours
                .map(|due| round1(due - aircraft.total_airframe_hours))
                .unwrap_or(NO_DUE_HOURS);

            Some(MaintenanceAlert {
                aircraft_id: aircraft.id,
                tail_number: aircraft.tail_number.clone(),
                check_type: record.check_type,
                status: record.status,
                days_until_due,
                hours_until_due,
                urgency: urgency(record.status, days_until_due, hours_until_due),
            })
        })
        .collect();

    // Stable, so equal urgencies keep record order
    alerts.sort_by_key(|alert| alert.urgency);

    alerts
}

fn urgency(status: MaintenanceStatus, days_until_due: i64, hours_until_due: f64) -> Urgency {
    if status == MaintenanceStatus::Overdue || days_until_due <= 7 || hours_until_due <= 5.0 {
        Urgency::Critical
    } else if days_until_due <= 30 || hours_until_due <= 25.0 {
        Urgency::Warning
    } else {
        Urgency::Info
    }
}
