//! Data transfer objects shared by the HTTP API.
//!
//! Every request and response body is defined here with camelCase JSON field names.
//! Request DTOs carry their field constraints through `validator::Validate`.

pub mod aircraft;
pub mod api;
pub mod auth;
pub mod flight_log;
pub mod maintenance;
