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
        api::{ErrorDto, ValidationErrorDto},
        flight_log::{FlightLogDto, FlightLogRequestDto, PilotStatsDto},
    },
    server::{
        error::AppError, model::flight_log::FlightLogParams,
        service::flight_log::FlightLogService, state::AppState,
    },
};

/// Tag for grouping flight log endpoints in OpenAPI documentation
pub static FLIGHT_LOG_TAG: &str = "flights";

/// List every pilot's flight log entries, newest flight first.
///
/// # Access Control
/// - `FLEET_MANAGER`, `ADMIN`
///
/// # Returns
/// - `200 OK` - All entries
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role may not read every pilot's log
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flights",
    tag = FLIGHT_LOG_TAG,
    responses(
        (status = 200, description = "All entries, newest first", body = Vec<FlightLogDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Role may not read every pilot's log", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_flights(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let entries = FlightLogService::new(&state.db).list_all().await?;

    let dtos: Vec<FlightLogDto> = entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List a pilot's flight log entries, newest flight first.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `pilot_id` - Pilot's user ID
///
/// # Returns
/// - `200 OK` - The pilot's entries, empty for an unknown pilot
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flights/pilot/{pilot_id}",
    tag = FLIGHT_LOG_TAG,
    params(
        ("pilot_id" = Uuid, Path, description = "Pilot's user ID")
    ),
    responses(
        (status = 200, description = "The pilot's entries, newest first", body = Vec<FlightLogDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pilot_flights(
    State(state): State<AppState>,
    Path(pilot_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let entries = FlightLogService::new(&state.db)
        .list_for_pilot(pilot_id)
        .await?;

    let dtos: Vec<FlightLogDto> = entries.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a flight log entry by ID.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The entry
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No entry with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flights/{id}",
    tag = FLIGHT_LOG_TAG,
    params(
        ("id" = Uuid, Path, description = "Flight log entry ID")
    ),
    responses(
        (status = 200, description = "The entry", body = FlightLogDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let entry = FlightLogService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Log a flight for a pilot.
///
/// Approach types are stored in the order given.
///
/// # Access Control
/// - `PILOT`, `ADMIN`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `pilot_id` - Pilot's user ID
/// - `payload` - Flight details
///
/// # Returns
/// - `201 Created` - The created entry
/// - `400 Bad Request` - Invalid flight data
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role may not log flights
/// - `404 Not Found` - Pilot or aircraft does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/flights/pilot/{pilot_id}",
    tag = FLIGHT_LOG_TAG,
    params(
        ("pilot_id" = Uuid, Path, description = "Pilot's user ID")
    ),
    request_body = FlightLogRequestDto,
    responses(
        (status = 201, description = "Entry created", body = FlightLogDto),
        (status = 400, description = "Invalid flight data", body = ValidationErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Role may not log flights", body = ErrorDto),
        (status = 404, description = "Pilot or aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    Path(pilot_id): Path<Uuid>,
    Json(payload): Json<FlightLogRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let entry = FlightLogService::new(&state.db)
        .create(pilot_id, FlightLogParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// Replace every field of a flight log entry except its pilot.
///
/// # Access Control
/// - `PILOT`, `ADMIN`
///
/// # Returns
/// - `200 OK` - The updated entry
/// - `400 Bad Request` - Invalid flight data
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role may not log flights
/// - `404 Not Found` - Entry or aircraft does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/flights/{id}",
    tag = FLIGHT_LOG_TAG,
    params(
        ("id" = Uuid, Path, description = "Flight log entry ID")
    ),
    request_body = FlightLogRequestDto,
    responses(
        (status = 200, description = "Entry updated", body = FlightLogDto),
        (status = 400, description = "Invalid flight data", body = ValidationErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Role may not log flights", body = ErrorDto),
        (status = 404, description = "Entry or aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<FlightLogRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let entry = FlightLogService::new(&state.db)
        .update(id, FlightLogParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(entry.into_dto())))
}

/// Delete a flight log entry.
///
/// # Access Control
/// - `PILOT`, `ADMIN`
///
/// # Returns
/// - `204 No Content` - Entry deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role may not log flights
/// - `404 Not Found` - No entry with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/flights/{id}",
    tag = FLIGHT_LOG_TAG,
    params(
        ("id" = Uuid, Path, description = "Flight log entry ID")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Role may not log flights", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_flight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    FlightLogService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a pilot's hour totals.
///
/// Sums every duration field, counts landings, totals the last 30, 90, and 365 days,
/// and groups hours by aircraft model in the order the models were last flown.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The pilot's totals, all zero for an unknown pilot
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/flights/pilot/{pilot_id}/stats",
    tag = FLIGHT_LOG_TAG,
    params(
        ("pilot_id" = Uuid, Path, description = "Pilot's user ID")
    ),
    responses(
        (status = 200, description = "The pilot's hour totals", body = PilotStatsDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pilot_stats(
    State(state): State<AppState>,
    Path(pilot_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let stats = FlightLogService::new(&state.db)
        .pilot_stats(pilot_id)
        .await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
