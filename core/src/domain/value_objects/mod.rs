//! Value objects returned by domain services.

pub mod verified_session;

pub use verified_session::{CustomerProfile, VerifiedSession};
