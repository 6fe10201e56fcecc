use chrono::{Duration, Utc};
use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

pub struct Config {
    pub database_url: String,
    pub server_addr: SocketAddr,

    pub jwt_secret: String,
    pub token_ttl: Duration,

    /// Origin allowed to call the API from a browser, any origin when unset.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let server_addr = optional_var("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.into());
        let token_ttl = match optional_var("TOKEN_TTL_HOURS") {
            Some(value) => token_ttl(parse_var("TOKEN_TTL_HOURS", &value)?)?,
            None => Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            server_addr: parse_var("SERVER_ADDR", &server_addr)?,
            jwt_secret: required_var("JWT_SECRET")?,
            token_ttl,
            cors_origin: optional_var("CORS_ORIGIN"),
        })
    }
}

/// Converts a token lifetime in hours, rejecting values that are not positive or that
/// would push token expiry past the representable date range.
fn token_ttl(hours: i64) -> Result<Duration, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "TOKEN_TTL_HOURS".to_string(),
        reason: reason.to_string(),
    };

    if hours <= 0 {
        return Err(invalid("must be a positive number of hours"));
    }

    let ttl = Duration::try_hours(hours).ok_or_else(|| invalid("too many hours"))?;
    if Utc::now().checked_add_signed(ttl).is_none() {
        return Err(invalid("too many hours"));
    }

    Ok(ttl)
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
