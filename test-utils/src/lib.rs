//! Logbook Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the logbook
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases plus factories for inserting users, aircraft, flight log entries and
//! maintenance records with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_aircraft() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_all_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let aircraft = factory::create_aircraft(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
