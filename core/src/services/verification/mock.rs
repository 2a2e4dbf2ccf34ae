//! Mock OTP transport for tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::traits::OtpTransport;

/// A delivered code captured by [`CapturingOtpTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredCode {
    /// `"email"` or `"phone"`
    pub channel: &'static str,
    /// Destination address the code was sent to
    pub address: String,
    /// The code itself
    pub code: String,
}

/// Transport that records every delivered code instead of sending it.
///
/// Tests register a customer, then read the captured pair back to drive
/// the verify step.
#[derive(Clone, Default)]
pub struct CapturingOtpTransport {
    sent: Arc<RwLock<Vec<DeliveredCode>>>,
}

impl CapturingOtpTransport {
    /// Create a new empty transport
    pub fn new() -> Self {
        Self::default()
    }

    /// All deliveries so far, oldest first
    pub async fn deliveries(&self) -> Vec<DeliveredCode> {
        self.sent.read().await.clone()
    }

    /// The most recently delivered code for an address on a channel
    pub async fn last_code_for(&self, channel: &str, address: &str) -> Option<String> {
        self.sent
            .read()
            .await
            .iter()
            .rev()
            .find(|d| d.channel == channel && d.address == address)
            .map(|d| d.code.clone())
    }
}

#[async_trait]
impl OtpTransport for CapturingOtpTransport {
    async fn deliver_email_code(&self, email: &str, code: &str) -> Result<(), DomainError> {
        self.sent.write().await.push(DeliveredCode {
            channel: "email",
            address: email.to_string(),
            code: code.to_string(),
        });
        Ok(())
    }

    async fn deliver_phone_code(&self, phone: &str, code: &str) -> Result<(), DomainError> {
        self.sent.write().await.push(DeliveredCode {
            channel: "phone",
            address: phone.to_string(),
            code: code.to_string(),
        });
        Ok(())
    }
}
