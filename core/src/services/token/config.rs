//! Token service configuration

use kyc_shared::config::JwtConfig;

/// Configuration for the session token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Shared signing secret
    pub secret: String,

    /// Token validity window in hours
    pub ttl_hours: i64,
}

impl TokenServiceConfig {
    pub fn new(secret: impl Into<String>, ttl_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_hours,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            ttl_hours: config.token_ttl_hours,
        }
    }
}
