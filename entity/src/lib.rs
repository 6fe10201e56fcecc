//! SeaORM entity models for the logbook database.

pub mod prelude;

pub mod aircraft;
pub mod flight_approach_type;
pub mod flight_log_entry;
pub mod maintenance_record;
pub mod sea_orm_active_enums;
pub mod user;
