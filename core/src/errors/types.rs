//! Error types for the verification flow and session tokens.
//!
//! Variants carry no HTTP knowledge; status codes and response bodies are
//! assigned at the API boundary.

use thiserror::Error;

/// Errors raised by the verification orchestrator
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VerificationError {
    /// No unverified identity matches the supplied email. An already
    /// verified identity is indistinguishable from an unknown one here.
    #[error("Customer not found or already verified")]
    CustomerNotFound,

    #[error("OTP has expired. Please request a new one.")]
    OtpExpired,

    #[error("Invalid OTP codes")]
    InvalidOtp,

    /// Registration targets an identity that already completed verification
    #[error("Customer is already verified")]
    AlreadyVerified,

    /// The registration path only resolves tenants that were explicitly
    /// provisioned; it never creates one.
    #[error("Tenant not configured: {slug}")]
    TenantNotConfigured { slug: String },

    /// Storage-layer uniqueness violation on (tenant, email). Orchestrator
    /// handles this by re-fetching and updating the existing record.
    #[error("Duplicate identity for tenant")]
    DuplicateIdentity,
}

/// Session-token errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    Invalid,

    #[error("Token generation failed")]
    GenerationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_verification_error_messages() {
        assert_eq!(
            VerificationError::CustomerNotFound.to_string(),
            "Customer not found or already verified"
        );
        assert_eq!(
            VerificationError::OtpExpired.to_string(),
            "OTP has expired. Please request a new one."
        );
        assert_eq!(VerificationError::InvalidOtp.to_string(), "Invalid OTP codes");
    }

    #[test]
    fn test_transparent_bridge() {
        let err: DomainError = VerificationError::InvalidOtp.into();
        assert_eq!(err.to_string(), "Invalid OTP codes");

        let err: DomainError = TokenError::Expired.into();
        assert_eq!(err.to_string(), "Token expired");
    }
}
