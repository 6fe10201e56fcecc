use crate::server::{
    error::AppError,
    model::aircraft::{AircraftParams, Urgency},
    service::aircraft::AircraftService,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{AircraftCategory, AircraftStatus, MaintenanceStatus};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod delete;
mod fleet_views;
mod update;

fn params(tail_number: &str, owner_id: Option<Uuid>) -> AircraftParams {
    AircraftParams {
        tail_number: tail_number.to_string(),
        make: "Beechcraft".to_string(),
        model: "Baron 58".to_string(),
        year: 1981,
        category: AircraftCategory::MultiEngineLand,
        total_airframe_hours: 6120.4,
        status: AircraftStatus::Airworthy,
        engine_count: 2,
        max_passengers: 5,
        owner_id,
        image_url: None,
    }
}
