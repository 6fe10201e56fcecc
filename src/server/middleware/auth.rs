use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
    state::AppState,
};

/// Roles allowed to change aircraft and maintenance records and to read every pilot's log.
pub const FLEET_MANAGEMENT: &[UserRole] = &[UserRole::FleetManager, UserRole::Admin];

/// Roles allowed to log, edit, and delete flights.
pub const FLIGHT_LOGGING: &[UserRole] = &[UserRole::Pilot, UserRole::Admin];

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { db, tokens, headers }
    }

    /// Resolves the bearer token to a user and checks the user's role.
    ///
    /// The user is always re-read from the database, so tokens of removed users stop
    /// working and the stored role wins over the role in the token. An empty `roles`
    /// slice accepts any authenticated user.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user holding one of `roles`
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Token failed verification
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject no longer exists
    /// - `Err(AuthError::AccessDenied)` - User's role is not in `roles`
    pub async fn require(&self, roles: &[UserRole]) -> Result<User, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        check_role(&user, roles)?;

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn check_role(user: &User, roles: &[UserRole]) -> Result<(), AuthError> {
    if roles.is_empty() || roles.contains(&user.role) {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        user.id,
        format!("role {:?} is not one of {:?}", user.role, roles),
    ))
}

/// Rejects requests without a valid bearer token and stores the authenticated `User` in
/// the request extensions for handlers and [`require_roles`].
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, request.headers())
        .require(&[])
        .await?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Rejects requests whose authenticated user holds none of the route's roles.
///
/// Layered per route registration with the role set as its state, inside
/// [`authenticate`].
pub async fn require_roles(
    State(roles): State<&'static [UserRole]>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(user) = request.extensions().get::<User>() else {
        return Err(AuthError::MissingToken.into());
    };

    check_role(user, roles)?;

    Ok(next.run(request).await)
}
