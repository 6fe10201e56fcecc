use crate::server::{data::aircraft::AircraftRepository, model::aircraft::AircraftParams};
use entity::sea_orm_active_enums::{AircraftCategory, AircraftStatus};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod delete;

fn params(tail_number: &str) -> AircraftParams {
    AircraftParams {
        tail_number: tail_number.to_string(),
        make: "Piper".to_string(),
        model: "PA-28-181".to_string(),
        year: 1998,
        category: AircraftCategory::SingleEngineLand,
        total_airframe_hours: 4321.5,
        status: AircraftStatus::Airworthy,
        engine_count: 1,
        max_passengers: 3,
        owner_id: None,
        image_url: Some("https://img.example.com/n4321.png".to_string()),
    }
}
