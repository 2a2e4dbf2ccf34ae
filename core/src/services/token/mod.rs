//! Session token service.
//!
//! Mints and validates the signed bearer tokens issued after a successful
//! OTP verification. Tokens are stateless: nothing is persisted, and
//! validation is a signature and expiry check only.

mod config;
mod service;

pub use config::TokenServiceConfig;
pub use service::TokenService;
