//! Admin request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use kyc_core::domain::entities::tenant::Tenant;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// URL-safe identifier the registration path resolves tenants by
    #[validate(length(min = 1, max = 64), regex = "crate::dto::admin::SLUG_PATTERN")]
    pub slug: String,

    #[validate(email)]
    pub contact_email: String,
}

pub(crate) static SLUG_PATTERN: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| {
        regex::Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("slug pattern must compile")
    });

/// The provisioned tenant, including the API key issued to the institution
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantResponse {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub contact_email: String,
    pub api_key: String,
    pub created_at: DateTime<Utc>,
}

impl From<Tenant> for TenantResponse {
    fn from(tenant: Tenant) -> Self {
        Self {
            id: tenant.id,
            slug: tenant.slug,
            name: tenant.name,
            contact_email: tenant.contact_email,
            api_key: tenant.api_key,
            created_at: tenant.created_at,
        }
    }
}
