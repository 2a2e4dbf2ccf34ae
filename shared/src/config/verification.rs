//! OTP verification flow configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or, ConfigError};

/// Default OTP validity window in minutes
pub const DEFAULT_OTP_TTL_MINUTES: i64 = 10;

/// Configuration for the OTP verification flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Minutes an issued OTP pair stays valid
    pub otp_ttl_minutes: i64,

    /// Tenant slug used when a registration request carries none
    pub default_tenant_slug: String,
}

impl VerificationConfig {
    /// Load from the environment with standard defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            otp_ttl_minutes: env_parse_or("KYC_OTP_TTL_MINUTES", DEFAULT_OTP_TTL_MINUTES)?,
            default_tenant_slug: env_or("KYC_DEFAULT_TENANT_SLUG", "default"),
        })
    }
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            otp_ttl_minutes: DEFAULT_OTP_TTL_MINUTES,
            default_tenant_slug: String::from("default"),
        }
    }
}
