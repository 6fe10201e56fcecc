//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: API endpoints, business rules, data
//! access, and the infrastructure to run them. The backend uses Axum as the web
//! framework and SeaORM over SQLite for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and derived fleet and pilot views
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication and role guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, token service)
//! - **Startup** (`startup`) - Database connection, migrations, and CORS setup
//! - **Router** (`router`) - Route registration, guards, and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and matches a route
//! 2. **Middleware** resolves the bearer token to a user and checks the route's roles
//! 3. **Controller** validates the DTO, converts it to params, calls the service
//! 4. **Service** applies business rules and orchestrates repository calls
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
