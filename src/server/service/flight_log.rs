//! Pilot flight logs and the hour totals derived from them.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{aircraft::AircraftRepository, flight_log::FlightLogRepository, user::UserRepository},
    error::AppError,
    model::flight_log::{FlightLogEntry, FlightLogParams, PilotStats},
    util::round::round1,
};

pub struct FlightLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every pilot's entries, newest flight first.
    pub async fn list_all(&self) -> Result<Vec<FlightLogEntry>, AppError> {
        Ok(FlightLogRepository::new(self.db).get_all().await?)
    }

    /// Gets one pilot's entries, newest flight first. An unknown pilot has no entries.
    pub async fn list_for_pilot(&self, pilot_id: Uuid) -> Result<Vec<FlightLogEntry>, AppError> {
        Ok(FlightLogRepository::new(self.db)
            .get_by_pilot(pilot_id)
            .await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<FlightLogEntry, AppError> {
        FlightLogRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Logs a flight for a pilot.
    ///
    /// # Returns
    /// - `Ok(FlightLogEntry)` - The created entry
    /// - `Err(AppError::NotFound)` - Pilot or aircraft does not exist, nothing is persisted
    pub async fn create(
        &self,
        pilot_id: Uuid,
        params: FlightLogParams,
    ) -> Result<FlightLogEntry, AppError> {
        if UserRepository::new(self.db).find_by_id(pilot_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Pilot {} not found", pilot_id)));
        }
        self.require_aircraft(params.aircraft_id).await?;

        let entry = FlightLogRepository::new(self.db)
            .create(pilot_id, params)
            .await?;

        tracing::info!("Pilot {} logged flight {}", pilot_id, entry.id);

        Ok(entry)
    }

    /// Replaces every field of an entry except its pilot. The aircraft may change.
    ///
    /// # Returns
    /// - `Ok(FlightLogEntry)` - The updated entry
    /// - `Err(AppError::NotFound)` - Entry or aircraft does not exist
    pub async fn update(&self, id: Uuid, params: FlightLogParams) -> Result<FlightLogEntry, AppError> {
        self.require_aircraft(params.aircraft_id).await?;

        FlightLogRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !FlightLogRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Computes hour totals over all of a pilot's entries as of today.
    pub async fn pilot_stats(&self, pilot_id: Uuid) -> Result<PilotStats, AppError> {
        let entries = FlightLogRepository::new(self.db)
            .get_by_pilot_without_approaches(pilot_id)
            .await?;

        Ok(pilot_stats(&entries, Utc::now().date_naive()))
    }

    async fn require_aircraft(&self, aircraft_id: Uuid) -> Result<(), AppError> {
        if AircraftRepository::new(self.db)
            .get_by_id(aircraft_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Aircraft {} not found",
                aircraft_id
            )));
        }

        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Flight log entry {} not found", id))
}

/// Duration fields summed into pilot totals, in the order of their total slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlightTimeField {
    Total,
    Pic,
    Sic,
    Night,
    Ifr,
    CrossCountry,
    DualReceived,
    Solo,
}

const FLIGHT_TIME_FIELDS: [(FlightTimeField, fn(&FlightLogEntry) -> f64); 8] = [
    (FlightTimeField::Total, |e| e.total_flight_time),
    (FlightTimeField::Pic, |e| e.pic_time),
    (FlightTimeField::Sic, |e| e.sic_time),
    (FlightTimeField::Night, |e| e.night_time),
    (FlightTimeField::Ifr, |e| e.ifr_time),
    (FlightTimeField::CrossCountry, |e| e.cross_country_time),
    (FlightTimeField::DualReceived, |e| e.dual_received_time),
    (FlightTimeField::Solo, |e| e.solo_time),
];

/// Sums every duration field in one pass over the field table.
fn flight_time_totals(entries: &[FlightLogEntry]) -> [f64; FLIGHT_TIME_FIELDS.len()] {
    let mut totals = [0.0; FLIGHT_TIME_FIELDS.len()];
    for (field, accessor) in FLIGHT_TIME_FIELDS {
        totals[field as usize] = round1(entries.iter().map(accessor).sum());
    }
    totals
}

fn flown_since(entries: &[FlightLogEntry], since: NaiveDate) -> f64 {
    round1(
        entries
            .iter()
            .filter(|e| e.date >= since)
            .map(|e| e.total_flight_time)
            .sum(),
    )
}

/// Computes hour totals for one pilot's entries.
///
/// `entries` should be ordered newest first; the per-model totals keep the order in
/// which each model is first encountered.
pub fn pilot_stats(entries: &[FlightLogEntry], today: NaiveDate) -> PilotStats {
    let mut by_aircraft_model: Vec<(String, f64)> = Vec::new();
    for entry in entries {
        match by_aircraft_model
            .iter_mut()
            .find(|(model, _)| *model == entry.aircraft_model)
        {
            Some((_, hours)) => *hours += entry.total_flight_time,
            None => by_aircraft_model.push((entry.aircraft_model.clone(), entry.total_flight_time)),
        }
    }
    for (_, hours) in by_aircraft_model.iter_mut() {
        *hours = round1(*hours);
    }

    let day_landings: i64 = entries.iter().map(|e| i64::from(e.day_landings)).sum();
    let night_landings: i64 = entries.iter().map(|e| i64::from(e.night_landings)).sum();
    let [
        total_time,
        pic_time,
        sic_time,
        night_time,
        ifr_time,
        cross_country_time,
        dual_received,
        solo_time,
    ] = flight_time_totals(entries);

    PilotStats {
        total_time,
        pic_time,
        sic_time,
        night_time,
        ifr_time,
        cross_country_time,
        dual_received,
        solo_time,
        total_landings: day_landings + night_landings,
        night_landings,
        last_30_days: flown_since(entries, today - Duration::days(30)),
        last_90_days: flown_since(entries, today - Duration::days(90)),
        last_year: flown_since(entries, today - Duration::days(365)),
        by_aircraft_model,
    }
}
