use crate::server::{
    data::maintenance::MaintenanceRepository, model::maintenance::MaintenanceParams,
};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::{MaintenanceCheckType, MaintenanceStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod get_by_aircraft;
mod get_by_statuses;
mod update;

fn params(aircraft_id: Uuid) -> MaintenanceParams {
    MaintenanceParams {
        aircraft_id,
        check_type: MaintenanceCheckType::HundredHour,
        status: MaintenanceStatus::Due,
        scheduled_date: date(2026, 5, 1),
        completed_date: None,
        hours_at_check: 2100.0,
        next_due_hours: Some(2200.0),
        next_due_date: Some(date(2026, 11, 1)),
        technician: Some("A. Mechanic".to_string()),
        squawks: Some("Left brake soft".to_string()),
        cost: Some(1450.75),
        notes: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
