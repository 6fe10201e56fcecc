//! HTTP request handlers.
//!
//! Controllers validate request DTOs, convert them to operation parameters, call the
//! matching service, and convert the returned domain models back to DTOs. Authentication
//! and role checks run in the router's middleware layers before a handler is reached.

pub mod aircraft;
pub mod auth;
pub mod flight_log;
pub mod maintenance;
