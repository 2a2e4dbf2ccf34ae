//! Session token signing configuration

use serde::{Deserialize, Serialize};

use super::{env_parse_or, require_env, ConfigError};

/// Default session token validity window in hours
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// JWT signing configuration for session tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret used to sign and verify session tokens
    pub secret: String,

    /// Session token validity window in hours
    pub token_ttl_hours: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl JwtConfig {
    /// Create a new JWT configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            issuer: String::from("kyc-onboard"),
        }
    }

    /// Set the token validity window in hours
    pub fn with_token_ttl_hours(mut self, hours: i64) -> Self {
        self.token_ttl_hours = hours;
        self
    }

    /// Load from the environment.
    ///
    /// `KYC_JWT_SECRET` is required: a process that cannot sign tokens with a
    /// real secret must not start. Rotating the secret invalidates every
    /// outstanding session token, which is an accepted operational property.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = require_env("KYC_JWT_SECRET")?;
        let token_ttl_hours =
            env_parse_or("KYC_TOKEN_TTL_HOURS", DEFAULT_TOKEN_TTL_HOURS)?;

        Ok(Self {
            secret,
            token_ttl_hours,
            issuer: String::from("kyc-onboard"),
        })
    }
}
