pub use super::aircraft::Entity as Aircraft;
pub use super::flight_approach_type::Entity as FlightApproachType;
pub use super::flight_log_entry::Entity as FlightLogEntry;
pub use super::maintenance_record::Entity as MaintenanceRecord;
pub use super::user::Entity as User;
