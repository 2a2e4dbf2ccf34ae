//! Administrative routes.

mod tenants;

pub use tenants::create_tenant;

/// Header carrying the admin provisioning key
pub const ADMIN_API_KEY_HEADER: &str = "X-Admin-Api-Key";
