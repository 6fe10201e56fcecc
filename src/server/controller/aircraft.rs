use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    model::{
        aircraft::{AircraftDto, AircraftRequestDto, FleetStatsDto, MaintenanceAlertDto},
        api::{ErrorDto, ValidationErrorDto},
    },
    server::{
        error::AppError, model::aircraft::AircraftParams, service::aircraft::AircraftService,
        state::AppState,
    },
};

/// Tag for grouping aircraft endpoints in OpenAPI documentation
pub static AIRCRAFT_TAG: &str = "aircraft";

/// List every aircraft in the fleet.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - All aircraft
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/aircraft",
    tag = AIRCRAFT_TAG,
    responses(
        (status = 200, description = "All aircraft", body = Vec<AircraftDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_aircraft(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let aircraft = AircraftService::new(&state.db).list().await?;

    let dtos: Vec<AircraftDto> = aircraft.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an aircraft by ID.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Aircraft ID
///
/// # Returns
/// - `200 OK` - The aircraft
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No aircraft with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/aircraft/{id}",
    tag = AIRCRAFT_TAG,
    params(
        ("id" = Uuid, Path, description = "Aircraft ID")
    ),
    responses(
        (status = 200, description = "The aircraft", body = AircraftDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_aircraft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let aircraft = AircraftService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(aircraft.into_dto())))
}

/// Add an aircraft to the fleet.
///
/// An `ownerId` that does not match a user is stored as no owner.
///
/// # Access Control
/// - `FLEET_MANAGER`, `ADMIN`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Aircraft fields
///
/// # Returns
/// - `201 Created` - The created aircraft
/// - `400 Bad Request` - Invalid aircraft data
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role may not manage the fleet
/// - `409 Conflict` - Tail number already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/aircraft",
    tag = AIRCRAFT_TAG,
    request_body = AircraftRequestDto,
    responses(
        (status = 201, description = "Aircraft created", body = AircraftDto),
        (status = 400, description = "Invalid aircraft data", body = ValidationErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Role may not manage the fleet", body = ErrorDto),
        (status = 409, description = "Tail number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_aircraft(
    State(state): State<AppState>,
    Json(payload): Json<AircraftRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let aircraft = AircraftService::new(&state.db)
        .create(AircraftParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(aircraft.into_dto())))
}

/// Replace every field of an aircraft.
///
/// Omitting `ownerId` clears the owner.
///
/// # Access Control
/// - `FLEET_MANAGER`, `ADMIN`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Aircraft ID
/// - `payload` - Replacement aircraft fields
///
/// # Returns
/// - `200 OK` - The updated aircraft
/// - `400 Bad Request` - Invalid aircraft data
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role may not manage the fleet
/// - `404 Not Found` - No aircraft with that ID
/// - `409 Conflict` - Tail number registered to another aircraft
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/aircraft/{id}",
    tag = AIRCRAFT_TAG,
    params(
        ("id" = Uuid, Path, description = "Aircraft ID")
    ),
    request_body = AircraftRequestDto,
    responses(
        (status = 200, description = "Aircraft updated", body = AircraftDto),
        (status = 400, description = "Invalid aircraft data", body = ValidationErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Role may not manage the fleet", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 409, description = "Tail number already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_aircraft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AircraftRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let aircraft = AircraftService::new(&state.db)
        .update(id, AircraftParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(aircraft.into_dto())))
}

/// Remove an aircraft together with its flight log entries and maintenance records.
///
/// # Access Control
/// - `FLEET_MANAGER`, `ADMIN`
///
/// # Returns
/// - `204 No Content` - Aircraft deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role may not manage the fleet
/// - `404 Not Found` - No aircraft with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/aircraft/{id}",
    tag = AIRCRAFT_TAG,
    params(
        ("id" = Uuid, Path, description = "Aircraft ID")
    ),
    responses(
        (status = 204, description = "Aircraft deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Role may not manage the fleet", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_aircraft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    AircraftService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get fleet-wide counters.
///
/// Counts aircraft per status, overdue checks, and DUE checks with a due date at most
/// 30 days away, and sums the airframe hours of the whole fleet.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Fleet counters
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/aircraft/fleet-stats",
    tag = AIRCRAFT_TAG,
    responses(
        (status = 200, description = "Fleet counters", body = FleetStatsDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fleet_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = AircraftService::new(&state.db).fleet_stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// List alerts for maintenance checks that are due, overdue, or in progress.
///
/// Alerts are ordered CRITICAL, WARNING, INFO.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Alerts, most urgent first
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/aircraft/alerts",
    tag = AIRCRAFT_TAG,
    responses(
        (status = 200, description = "Alerts, most urgent first", body = Vec<MaintenanceAlertDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maintenance_alerts(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let alerts = AircraftService::new(&state.db).maintenance_alerts().await?;

    let dtos: Vec<MaintenanceAlertDto> = alerts.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
