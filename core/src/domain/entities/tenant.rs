//! Tenant entity representing an institution using the platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An institution (bank) isolating its own customers and configuration.
///
/// Tenants are provisioned once through the admin surface and are effectively
/// immutable afterwards. The slug is globally unique and is how the runtime
/// registration path resolves a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// Unique identifier for the tenant
    pub id: Uuid,

    /// URL-safe unique identifier, e.g. `demo-bank`
    pub slug: String,

    /// Human-readable institution name
    pub name: String,

    /// Operational contact address
    pub contact_email: String,

    /// API key issued to the institution
    pub api_key: String,

    /// Timestamp when the tenant was provisioned
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    /// Creates a new tenant with a freshly generated API key
    pub fn new(slug: String, name: String, contact_email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            slug,
            name,
            contact_email,
            api_key: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tenant() {
        let tenant = Tenant::new(
            "demo-bank".to_string(),
            "Demo Bank".to_string(),
            "admin@demobank.com".to_string(),
        );

        assert_eq!(tenant.slug, "demo-bank");
        assert_eq!(tenant.name, "Demo Bank");
        assert!(!tenant.api_key.is_empty());
    }

    #[test]
    fn test_api_keys_are_unique() {
        let a = Tenant::new("a".into(), "A".into(), "a@a.com".into());
        let b = Tenant::new("b".into(), "B".into(), "b@b.com".into());
        assert_ne!(a.api_key, b.api_key);
    }
}
