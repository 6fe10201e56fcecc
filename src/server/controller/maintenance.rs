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
        maintenance::{MaintenanceDto, MaintenanceRequestDto},
    },
    server::{
        error::AppError, model::maintenance::MaintenanceParams,
        service::maintenance::MaintenanceService, state::AppState,
    },
};

/// Tag for grouping maintenance endpoints in OpenAPI documentation
pub static MAINTENANCE_TAG: &str = "maintenance";

/// List every maintenance record.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - All records
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/maintenance",
    tag = MAINTENANCE_TAG,
    responses(
        (status = 200, description = "All records", body = Vec<MaintenanceDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_maintenance(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let records = MaintenanceService::new(&state.db).list().await?;

    let dtos: Vec<MaintenanceDto> = records.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List an aircraft's maintenance records, latest scheduled date first.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The aircraft's records, empty for an unknown aircraft
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/maintenance/aircraft/{aircraft_id}",
    tag = MAINTENANCE_TAG,
    params(
        ("aircraft_id" = Uuid, Path, description = "Aircraft ID")
    ),
    responses(
        (status = 200, description = "The aircraft's records", body = Vec<MaintenanceDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_aircraft_maintenance(
    State(state): State<AppState>,
    Path(aircraft_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let records = MaintenanceService::new(&state.db)
        .list_for_aircraft(aircraft_id)
        .await?;

    let dtos: Vec<MaintenanceDto> = records.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a maintenance record by ID.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The record
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No record with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(
        ("id" = Uuid, Path, description = "Maintenance record ID")
    ),
    responses(
        (status = 200, description = "The record", body = MaintenanceDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let record = MaintenanceService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// Record a maintenance check for an aircraft.
///
/// # Access Control
/// - `FLEET_MANAGER`, `ADMIN`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Check details including the aircraft ID
///
/// # Returns
/// - `201 Created` - The created record
/// - `400 Bad Request` - Invalid maintenance data
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role may not manage the fleet
/// - `404 Not Found` - Aircraft does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/maintenance",
    tag = MAINTENANCE_TAG,
    request_body = MaintenanceRequestDto,
    responses(
        (status = 201, description = "Record created", body = MaintenanceDto),
        (status = 400, description = "Invalid maintenance data", body = ValidationErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Role may not manage the fleet", body = ErrorDto),
        (status = 404, description = "Aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_maintenance(
    State(state): State<AppState>,
    Json(payload): Json<MaintenanceRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let record = MaintenanceService::new(&state.db)
        .create(MaintenanceParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(record.into_dto())))
}

/// Replace every field of a maintenance record.
///
/// # Access Control
/// - `FLEET_MANAGER`, `ADMIN`
///
/// # Returns
/// - `200 OK` - The updated record
/// - `400 Bad Request` - Invalid maintenance data
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role may not manage the fleet
/// - `404 Not Found` - Record or aircraft does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(
        ("id" = Uuid, Path, description = "Maintenance record ID")
    ),
    request_body = MaintenanceRequestDto,
    responses(
        (status = 200, description = "Record updated", body = MaintenanceDto),
        (status = 400, description = "Invalid maintenance data", body = ValidationErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Role may not manage the fleet", body = ErrorDto),
        (status = 404, description = "Record or aircraft not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MaintenanceRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let record = MaintenanceService::new(&state.db)
        .update(id, MaintenanceParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(record.into_dto())))
}

/// Delete a maintenance record.
///
/// # Access Control
/// - `FLEET_MANAGER`, `ADMIN`
///
/// # Returns
/// - `204 No Content` - Record deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role may not manage the fleet
/// - `404 Not Found` - No record with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(
        ("id" = Uuid, Path, description = "Maintenance record ID")
    ),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Role may not manage the fleet", body = ErrorDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    MaintenanceService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
