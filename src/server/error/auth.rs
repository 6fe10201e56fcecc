use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token failed signature, expiry, or format validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(jsonwebtoken::errors::Error),

    /// Token subject does not match any user, usually because the user was removed
    /// after the token was issued.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(Uuid),

    /// Login email is unknown or the password did not verify.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated user lacks the role required by the route.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Description of the denied action for server-side logs
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(Uuid, String),

    /// Signing a new token failed.
    #[error("Failed to issue token: {0}")]
    TokenIssue(jsonwebtoken::errors::Error),

    /// Hashing a password failed or a stored hash could not be parsed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and generic messages:
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `AccessDenied` → 403 Forbidden
/// - `TokenIssue` / `PasswordHash` → 500 Internal Server Error
///
/// Client errors are logged at debug level, server errors at error level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);
                (StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action",
                )
            }
            Self::TokenIssue(_) | Self::PasswordHash(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
