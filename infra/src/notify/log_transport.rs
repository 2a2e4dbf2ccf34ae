//! Logging OTP transport.
//!
//! Stands in for real email and SMS providers: codes are written to the
//! application log instead of being delivered. Suitable for development and
//! demo environments only, where the log stands in for the inbox.

use async_trait::async_trait;
use tracing::info;

use kyc_core::errors::DomainError;
use kyc_core::services::verification::OtpTransport;

/// Transport that logs codes instead of sending them
pub struct LogOtpTransport;

impl LogOtpTransport {
    /// Create a new logging transport
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogOtpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpTransport for LogOtpTransport {
    async fn deliver_email_code(&self, email: &str, code: &str) -> Result<(), DomainError> {
        info!(channel = "email", to = email, code = code, "OTP issued");
        Ok(())
    }

    async fn deliver_phone_code(&self, phone: &str, code: &str) -> Result<(), DomainError> {
        info!(channel = "phone", to = phone, code = code, "OTP issued");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delivery_always_succeeds() {
        let transport = LogOtpTransport::new();
        assert!(transport.deliver_email_code("a@x.com", "123456").await.is_ok());
        assert!(transport.deliver_phone_code("555-0100", "654321").await.is_ok());
    }
}
