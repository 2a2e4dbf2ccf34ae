//! API process configuration.

use kyc_shared::config::{
    ConfigError, DatabaseConfig, JwtConfig, ServerConfig, VerificationConfig,
};

/// Everything the API binary needs from the environment, loaded once at
/// startup. Loading fails, and the process refuses to start, when a
/// security-sensitive value like the JWT secret or the admin API key is
/// missing.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub verification: VerificationConfig,

    /// Key required by the tenant-provisioning admin endpoint
    pub admin_api_key: String,
}

impl ApiConfig {
    /// Load the full configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            verification: VerificationConfig::from_env()?,
            admin_api_key: kyc_shared::config::require_env("KYC_ADMIN_API_KEY")?,
        })
    }
}
