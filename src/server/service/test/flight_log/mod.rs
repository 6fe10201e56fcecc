use crate::server::{
    error::AppError, model::flight_log::FlightLogParams, service::flight_log::FlightLogService,
};
use chrono::{Duration, NaiveDate, Utc};
use entity::sea_orm_active_enums::{FlightRule, WeatherCondition};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod pilot_stats;
mod update;

fn params(aircraft_id: Uuid, date: NaiveDate, total: f64) -> FlightLogParams {
    FlightLogParams {
        aircraft_id,
        date,
        departure_airport: "KSQL".to_string(),
        arrival_airport: "KSQL".to_string(),
        total_flight_time: total,
        pic_time: total,
        sic_time: 0.0,
        dual_received_time: 0.0,
        solo_time: total,
        night_time: 0.0,
        ifr_time: 0.0,
        cross_country_time: 0.0,
        day_landings: 3,
        night_landings: 0,
        weather_condition: WeatherCondition::Vmc,
        flight_rule: FlightRule::Vfr,
        remarks: None,
        approach_types: Vec::new(),
        simulator_time: None,
    }
}
