//! Environment-backed configuration for the KycOnboard backend.
//!
//! Every config struct reads from the process environment exactly once at
//! startup. Values that are security-sensitive (the JWT signing secret) have
//! no default: loading fails instead of silently falling back.

mod auth;
mod database;
mod server;
mod verification;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;
pub use verification::VerificationConfig;

use thiserror::Error;

/// Errors raised while loading configuration from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {name}")]
    MissingVariable { name: String },

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Read a required environment variable, failing if it is unset or empty
pub fn require_env(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVariable {
            name: name.to_string(),
        }),
    }
}

/// Read an optional environment variable with a default
pub(crate) fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment variable into a target type, with a default
pub(crate) fn env_parse_or<T: std::str::FromStr>(
    name: &str,
    default: T,
) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}
