//! Verification service module for the OTP onboarding flow.
//!
//! This module provides the complete identity verification workflow:
//! - OTP pair generation with a shared expiry
//! - Registration and resend, persisting the pending challenge
//! - Code verification with constant-time comparison
//! - Session token minting on success

mod generator;
mod service;
mod traits;
mod types;

pub mod mock;

#[cfg(test)]
mod tests;

pub use generator::{OtpGenerator, OTP_CODE_LENGTH};
pub use service::VerificationService;
pub use traits::OtpTransport;
pub use types::RegistrationReceipt;
