//! Flight log domain models, parameters, and pilot statistics.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{FlightRule, WeatherCondition};
use uuid::Uuid;

use crate::model::flight_log::{FlightLogDto, FlightLogRequestDto, PilotStatsDto};

/// One logged flight with the pilot and aircraft display fields joined in.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightLogEntry {
    pub id: Uuid,
    pub pilot_id: Uuid,
    pub pilot_name: String,
    pub aircraft_id: Uuid,
    pub aircraft_tail_number: String,
    pub aircraft_model: String,
    pub date: NaiveDate,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub total_flight_time: f64,
    pub pic_time: f64,
    pub sic_time: f64,
    pub dual_received_time: f64,
    pub solo_time: f64,
    pub night_time: f64,
    pub ifr_time: f64,
    pub cross_country_time: f64,
    pub day_landings: i32,
    pub night_landings: i32,
    pub weather_condition: WeatherCondition,
    pub flight_rule: FlightRule,
    pub remarks: Option<String>,
    /// Approaches flown, in the order they were logged.
    pub approach_types: Vec<String>,
    pub simulator_time: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FlightLogEntry {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// Falls back to empty display fields when the pilot or aircraft was not loaded.
    ///
    /// # Arguments
    /// - `entity` - The flight log entry entity from the database
    /// - `pilot` - The pilot who logged the flight
    /// - `aircraft` - The aircraft flown
    /// - `approach_types` - Approach type names already sorted by position
    pub fn from_entity(
        entity: entity::flight_log_entry::Model,
        pilot: Option<&entity::user::Model>,
        aircraft: Option<&entity::aircraft::Model>,
        approach_types: Vec<String>,
    ) -> Self {
        Self {
            id: entity.id,
            pilot_id: entity.pilot_id,
            pilot_name: pilot.map(|p| p.name.clone()).unwrap_or_default(),
            aircraft_id: entity.aircraft_id,
            aircraft_tail_number: aircraft.map(|a| a.tail_number.clone()).unwrap_or_default(),
            aircraft_model: aircraft.map(|a| a.model_name.clone()).unwrap_or_default(),
            date: entity.date,
            departure_airport: entity.departure_airport,
            arrival_airport: entity.arrival_airport,
            total_flight_time: entity.total_flight_time,
            pic_time: entity.pic_time,
            sic_time: entity.sic_time,
            dual_received_time: entity.dual_received_time,
            solo_time: entity.solo_time,
            night_time: entity.night_time,
            ifr_time: entity.ifr_time,
            cross_country_time: entity.cross_country_time,
            day_landings: entity.day_landings,
            night_landings: entity.night_landings,
            weather_condition: entity.weather_condition,
            flight_rule: entity.flight_rule,
            remarks: entity.remarks,
            approach_types,
            simulator_time: entity.simulator_time,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> FlightLogDto {
        FlightLogDto {
            id: self.id,
            pilot_id: self.pilot_id,
            pilot_name: self.pilot_name,
            aircraft_id: self.aircraft_id,
            aircraft_tail_number: self.aircraft_tail_number,
            aircraft_model: self.aircraft_model,
            date: self.date,
            departure_airport: self.departure_airport,
            arrival_airport: self.arrival_airport,
            total_flight_time: self.total_flight_time,
            pic_time: self.pic_time,
            sic_time: self.sic_time,
            dual_received_time: self.dual_received_time,
            solo_time: self.solo_time,
            night_time: self.night_time,
            ifr_time: self.ifr_time,
            cross_country_time: self.cross_country_time,
            day_landings: self.day_landings,
            night_landings: self.night_landings,
            weather_condition: self.weather_condition,
            flight_rule: self.flight_rule,
            remarks: self.remarks,
            approach_types: self.approach_types,
            simulator_time: self.simulator_time,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Every mutable flight log field, used for both create and full-replace update.
///
/// The pilot is not part of the parameters: it is fixed when the entry is created.
#[derive(Debug, Clone)]
pub struct FlightLogParams {
    pub aircraft_id: Uuid,
    pub date: NaiveDate,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub total_flight_time: f64,
    pub pic_time: f64,
    pub sic_time: f64,
    pub dual_received_time: f64,
    pub solo_time: f64,
    pub night_time: f64,
    pub ifr_time: f64,
    pub cross_country_time: f64,
    pub day_landings: i32,
    pub night_landings: i32,
    pub weather_condition: WeatherCondition,
    pub flight_rule: FlightRule,
    pub remarks: Option<String>,
    pub approach_types: Vec<String>,
    pub simulator_time: Option<f64>,
}

impl FlightLogParams {
    /// Converts a request DTO into parameters.
    pub fn from_dto(dto: FlightLogRequestDto) -> Self {
        Self {
            aircraft_id: dto.aircraft_id,
            date: dto.date,
            departure_airport: dto.departure_airport,
            arrival_airport: dto.arrival_airport,
            total_flight_time: dto.total_flight_time,
            pic_time: dto.pic_time,
            sic_time: dto.sic_time,
            dual_received_time: dto.dual_received_time,
            solo_time: dto.solo_time,
            night_time: dto.night_time,
            ifr_time: dto.ifr_time,
            cross_country_time: dto.cross_country_time,
            day_landings: dto.day_landings,
            night_landings: dto.night_landings,
            weather_condition: dto.weather_condition,
            flight_rule: dto.flight_rule,
            remarks: dto.remarks,
            approach_types: dto.approach_types,
            simulator_time: dto.simulator_time,
        }
    }
}

/// Flight hour totals for one pilot.
#[derive(Debug, Clone, PartialEq)]
pub struct PilotStats {
    pub total_time: f64,
    pub pic_time: f64,
    pub sic_time: f64,
    pub night_time: f64,
    pub ifr_time: f64,
    pub cross_country_time: f64,
    pub dual_received: f64,
    pub solo_time: f64,
    pub total_landings: i64,
    pub night_landings: i64,
    pub last_30_days: f64,
    pub last_90_days: f64,
    pub last_year: f64,
    /// Hours per aircraft model in first-encountered order.
    pub by_aircraft_model: Vec<(String, f64)>,
}

impl PilotStats {
    pub fn into_dto(self) -> PilotStatsDto {
        PilotStatsDto {
            total_time: self.total_time,
            pic_time: self.pic_time,
            sic_time: self.sic_time,
            night_time: self.night_time,
            ifr_time: self.ifr_time,
            cross_country_time: self.cross_country_time,
            dual_received: self.dual_received,
            solo_time: self.solo_time,
            total_landings: self.total_landings,
            night_landings: self.night_landings,
            last30_days: self.last_30_days,
            last90_days: self.last_90_days,
            last_year: self.last_year,
            by_aircraft_category: self.by_aircraft_model,
        }
    }
}
