use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::RegisterParams,
    service::{auth::AuthService, token::TokenService},
};
use entity::sea_orm_active_enums::UserRole;
use test_utils::builder::TestBuilder;

mod login;
mod register;

fn register_params(email: &str) -> RegisterParams {
    RegisterParams {
        name: "Pete Mitchell".to_string(),
        email: email.to_string(),
        password: "talk-to-me-goose".to_string(),
        role: UserRole::Pilot,
    }
}
