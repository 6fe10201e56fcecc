//! Email and password authentication.
//!
//! Registration hashes the password with Argon2 and a random salt, login verifies it
//! against the stored hash. Both issue a bearer token on success.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, conflict_on_unique, AppError},
    model::user::{AuthToken, CreateUserParams, RegisterParams},
    service::token::TokenService,
};

const EMAIL_TAKEN: &str = "Email is already registered";

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new user and issues a token for them.
    ///
    /// # Returns
    /// - `Ok(AuthToken)` - The created user with a fresh token
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::AuthErr)` - Hashing or signing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, params: RegisterParams) -> Result<AuthToken, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_exists(&params.email).await? {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let user = repo
            .create(CreateUserParams {
                avatar_initials: avatar_initials(&params.name),
                password_hash: hash_password(&params.password)?,
                name: params.name,
                email: params.email,
                role: params.role,
            })
            .await
            // Two registrations racing for the same email
            .map_err(|e| conflict_on_unique(e, EMAIL_TAKEN))?;

        tracing::info!("Registered user {} with role {:?}", user.id, user.role);

        let token = self.tokens.issue(&user)?;

        Ok(AuthToken { token, user })
    }

    /// Verifies an email and password and issues a token.
    ///
    /// Unknown email and wrong password produce the same error.
    ///
    /// # Returns
    /// - `Ok(AuthToken)` - Credentials verified
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Unknown email or bad password
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthToken, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(credentials) = repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        verify_password(password, &credentials.password_hash)?;

        let token = self.tokens.issue(&credentials.user)?;

        Ok(AuthToken {
            token,
            user: credentials.user,
        })
    }
}

/// Derives upper-cased avatar initials from a display name.
///
/// Two or more words give the first letters of the first and last word, a single word
/// gives its first letter, and a blank name gives an empty string.
pub fn avatar_initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();

    let initials: String = match parts.as_slice() {
        [] => String::new(),
        [only] => only.chars().take(1).collect(),
        [first, .., last] => first.chars().take(1).chain(last.chars().take(1)).collect(),
    };

    initials.to_uppercase()
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash(e.to_string()))
}

fn verify_password(password: &str, stored_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}
