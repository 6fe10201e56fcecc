//! User domain models and parameters.
//!
//! Users authenticate with email and password and carry one role which decides the
//! routes they may call.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;
use uuid::Uuid;

use crate::model::auth::{AuthDto, RegisterDto, UserDto};

/// Registered user without credential data.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Upper-cased initials derived from the name at registration.
    pub avatar_initials: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            avatar_initials: self.avatar_initials,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is dropped; use `UserCredentials` where it is needed.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
            avatar_initials: entity.avatar_initials,
            created_at: entity.created_at,
        }
    }
}

/// User together with the stored password hash, only produced for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();

        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for inserting a newly registered user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub avatar_initials: String,
}

/// Registration request after validation, the password still in plain text.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role: dto.role,
        }
    }
}

/// Freshly issued bearer token and the user it was issued for.
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub token: String,
    pub user: User,
}

impl AuthToken {
    pub fn into_dto(self) -> AuthDto {
        AuthDto {
            token: self.token,
            user_id: self.user.id,
            name: self.user.name,
            email: self.user.email,
            role: self.user.role,
            avatar_initials: self.user.avatar_initials,
        }
    }
}
