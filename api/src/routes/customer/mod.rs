//! Customer onboarding routes.

mod register;
mod resend_otp;
mod submit_kyc;
mod verify_otp;

pub use register::register;
pub use resend_otp::resend_otp;
pub use submit_kyc::submit_kyc;
pub use verify_otp::verify_otp;

/// Header a host page may set to scope registration to a tenant
pub const TENANT_SLUG_HEADER: &str = "X-Tenant-Slug";
