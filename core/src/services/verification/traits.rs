//! Collaborator traits for the verification service.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Out-of-band delivery of one-time codes.
///
/// Codes are never returned to the API caller; they reach the customer only
/// through this transport. Real deployments plug in email and SMS providers;
/// the in-tree implementation logs the codes instead.
#[async_trait]
pub trait OtpTransport: Send + Sync {
    /// Deliver a code to the customer's email address
    async fn deliver_email_code(&self, email: &str, code: &str) -> Result<(), DomainError>;

    /// Deliver a code to the customer's phone number
    async fn deliver_phone_code(&self, phone: &str, code: &str) -> Result<(), DomainError>;
}
