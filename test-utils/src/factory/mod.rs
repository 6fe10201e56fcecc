//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories only insert the
//! row they are asked for; callers create referenced rows first.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let pilot = factory::user::UserFactory::new(db)
//!     .name("Jane Doe")
//!     .role(UserRole::Pilot)
//!     .build()
//!     .await?;
//! let aircraft = factory::create_aircraft(db).await?;
//! let entry = factory::flight_log::FlightLogFactory::new(db, pilot.id, aircraft.id)
//!     .total_flight_time(1.5)
//!     .build()
//!     .await?;
//! ```

pub mod aircraft;
pub mod flight_log;
pub mod helpers;
pub mod maintenance;
pub mod user;

pub use aircraft::create_aircraft;
pub use flight_log::create_flight_log;
pub use maintenance::create_maintenance_record;
pub use user::create_user;
