//! Flight log factory for creating test flight log entries.
//!
//! The factory inserts the entry row and its approach type rows. The referenced pilot
//! and aircraft must already exist.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{FlightRule, WeatherCondition};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

pub struct FlightLogFactory<'a> {
    db: &'a DatabaseConnection,
    pilot_id: Uuid,
    aircraft_id: Uuid,
    date: NaiveDate,
    total_flight_time: f64,
    pic_time: f64,
    night_time: f64,
    day_landings: i32,
    night_landings: i32,
    approach_types: Vec<String>,
}

impl<'a> FlightLogFactory<'a> {
    /// Creates a new FlightLogFactory with default values.
    ///
    /// Defaults to a 1.0 hour VFR day flight flown today with one day landing.
    pub fn new(db: &'a DatabaseConnection, pilot_id: Uuid, aircraft_id: Uuid) -> Self {
        Self {
            db,
            pilot_id,
            aircraft_id,
            date: Utc::now().date_naive(),
            total_flight_time: 1.0,
            pic_time: 1.0,
            night_time: 0.0,
            day_landings: 1,
            night_landings: 0,
            approach_types: Vec::new(),
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn total_flight_time(mut self, hours: f64) -> Self {
        self.total_flight_time = hours;
        self
    }

    pub fn pic_time(mut self, hours: f64) -> Self {
        self.pic_time = hours;
        self
    }

    pub fn night_time(mut self, hours: f64) -> Self {
        self.night_time = hours;
        self
    }

    pub fn landings(mut self, day: i32, night: i32) -> Self {
        self.day_landings = day;
        self.night_landings = night;
        self
    }

    pub fn approach_types(mut self, approach_types: &[&str]) -> Self {
        self.approach_types = approach_types.iter().map(|a| a.to_string()).collect();
        self
    }

    /// Builds and inserts the entry along with its approach types.
    ///
    /// # Returns
    /// - `Ok(entity::flight_log_entry::Model)` - Created entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flight_log_entry::Model, DbErr> {
        let now = Utc::now();
        let entry = entity::flight_log_entry::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            pilot_id: ActiveValue::Set(self.pilot_id),
            aircraft_id: ActiveValue::Set(self.aircraft_id),
            date: ActiveValue::Set(self.date),
            departure_airport: ActiveValue::Set("KPAO".to_string()),
            arrival_airport: ActiveValue::Set("KSQL".to_string()),
            total_flight_time: ActiveValue::Set(self.total_flight_time),
            pic_time: ActiveValue::Set(self.pic_time),
            sic_time: ActiveValue::Set(0.0),
            dual_received_time: ActiveValue::Set(0.0),
            solo_time: ActiveValue::Set(0.0),
            night_time: ActiveValue::Set(self.night_time),
            ifr_time: ActiveValue::Set(0.0),
            cross_country_time: ActiveValue::Set(0.0),
            day_landings: ActiveValue::Set(self.day_landings),
            night_landings: ActiveValue::Set(self.night_landings),
            weather_condition: ActiveValue::Set(WeatherCondition::Vmc),
            flight_rule: ActiveValue::Set(FlightRule::Vfr),
            remarks: ActiveValue::Set(None),
            simulator_time: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        for (position, approach_type) in self.approach_types.into_iter().enumerate() {
            entity::flight_approach_type::ActiveModel {
                flight_log_entry_id: ActiveValue::Set(entry.id),
                position: ActiveValue::Set(position as i32),
                approach_type: ActiveValue::Set(approach_type),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(entry)
    }
}

/// Creates a default flight log entry for the pilot and aircraft.
pub async fn create_flight_log(
    db: &DatabaseConnection,
    pilot_id: Uuid,
    aircraft_id: Uuid,
) -> Result<entity::flight_log_entry::Model, DbErr> {
    FlightLogFactory::new(db, pilot_id, aircraft_id)
        .build()
        .await
}
