//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Row identifiers and `created_at` / `updated_at` timestamps are assigned here.

pub mod aircraft;
pub mod flight_log;
pub mod maintenance;
pub mod user;

#[cfg(test)]
mod test;
