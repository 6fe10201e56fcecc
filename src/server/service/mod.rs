//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the rules
//! repositories do not know about (referenced records must exist, unique values are
//! reported as conflicts) and compute the derived fleet and pilot views. Services work
//! with domain models and return `AppError`, never DTOs or entity models.

pub mod aircraft;
pub mod auth;
pub mod flight_log;
pub mod maintenance;
pub mod token;

#[cfg(test)]
mod test;
