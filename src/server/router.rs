//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered with its utoipa specification so the OpenAPI document
//! is collected from the handlers themselves. Registration, login, and the docs are
//! public; every other route sits behind the bearer token layer, and routes which change
//! data additionally carry a role guard for the roles allowed to call them.

use axum::{middleware, Router};
use entity::sea_orm_active_enums::UserRole;
use utoipa::OpenApi;
use utoipa_axum::{
    router::{OpenApiRouter, UtoipaMethodRouter},
    routes,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller,
    middleware::auth::{authenticate, require_roles, FLEET_MANAGEMENT, FLIGHT_LOGGING},
    state::AppState,
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/register`, `POST /api/auth/login` - Public
/// - `GET /api/auth/user` - Current user
/// - `/api/aircraft`, `/api/aircraft/{id}`, `/api/aircraft/fleet-stats`,
///   `/api/aircraft/alerts` - Fleet, writes restricted to fleet managers and admins
/// - `/api/flights`, `/api/flights/{id}`, `/api/flights/pilot/{pilot_id}`,
///   `/api/flights/pilot/{pilot_id}/stats` - Flight logs, writes restricted to pilots and
///   admins, the full listing to fleet managers and admins
/// - `/api/maintenance`, `/api/maintenance/{id}`,
///   `/api/maintenance/aircraft/{aircraft_id}` - Maintenance, writes restricted to fleet
///   managers and admins
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Arguments
/// - `state` - Application state, also needed by the authentication layer
///
/// # Returns
/// A `Router` with state applied, ready to be served.
pub fn router(state: AppState) -> Router {
    #[derive(OpenApi)]
    #[openapi(info(title = "Logbook", description = "Fleet, flight log, and maintenance API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration and login"),
        (name = controller::aircraft::AIRCRAFT_TAG, description = "Aircraft and fleet views"),
        (name = controller::flight_log::FLIGHT_LOG_TAG, description = "Pilot flight logs"),
        (name = controller::maintenance::MAINTENANCE_TAG, description = "Maintenance records"),
    ))]
    struct ApiDoc;

    let protected = OpenApiRouter::new()
        .routes(routes!(controller::auth::get_user))
        // Aircraft
        .routes(routes!(controller::aircraft::get_all_aircraft))
        .routes(guarded(routes!(controller::aircraft::create_aircraft), FLEET_MANAGEMENT))
        .routes(routes!(controller::aircraft::get_fleet_stats))
        .routes(routes!(controller::aircraft::get_maintenance_alerts))
        .routes(routes!(controller::aircraft::get_aircraft))
        .routes(guarded(routes!(controller::aircraft::update_aircraft), FLEET_MANAGEMENT))
        .routes(guarded(routes!(controller::aircraft::delete_aircraft), FLEET_MANAGEMENT))
        // Flights
        .routes(guarded(routes!(controller::flight_log::get_all_flights), FLEET_MANAGEMENT))
        .routes(routes!(controller::flight_log::get_pilot_flights))
        .routes(guarded(routes!(controller::flight_log::create_flight), FLIGHT_LOGGING))
        .routes(routes!(controller::flight_log::get_pilot_stats))
        .routes(routes!(controller::flight_log::get_flight))
        .routes(guarded(routes!(controller::flight_log::update_flight), FLIGHT_LOGGING))
        .routes(guarded(routes!(controller::flight_log::delete_flight), FLIGHT_LOGGING))
        // Maintenance
        .routes(routes!(controller::maintenance::get_all_maintenance))
        .routes(guarded(routes!(controller::maintenance::create_maintenance), FLEET_MANAGEMENT))
        .routes(routes!(controller::maintenance::get_aircraft_maintenance))
        .routes(routes!(controller::maintenance::get_maintenance))
        .routes(guarded(routes!(controller::maintenance::update_maintenance), FLEET_MANAGEMENT))
        .routes(guarded(routes!(controller::maintenance::delete_maintenance), FLEET_MANAGEMENT))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .merge(protected)
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .with_state(state)
}

/// Restricts one method of a route to the given roles.
///
/// Applied per registration so methods sharing a path can carry different role sets.
fn guarded(
    (schemas, paths, method_router): UtoipaMethodRouter<AppState>,
    roles: &'static [UserRole],
) -> UtoipaMethodRouter<AppState> {
    let method_router =
        method_router.route_layer(middleware::from_fn_with_state(roles, require_roles));

    (schemas, paths, method_router)
}
