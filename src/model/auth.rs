use entity::sea_orm_active_enums::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::model::api::not_blank;

#[derive(Serialize, Deserialize, Validate, ToSchema, Clone, Debug)]
pub struct RegisterDto {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(email, custom(function = "not_blank"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub password: String,
    pub role: UserRole,
}

#[derive(Serialize, Deserialize, Validate, ToSchema, Clone, Debug)]
pub struct LoginDto {
    #[validate(email, custom(function = "not_blank"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub password: String,
}

/// Token issued on register and login together with the user's profile.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthDto {
    pub token: String,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar_initials: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar_initials: String,
}
