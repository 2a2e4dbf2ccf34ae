//! Tenant repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::tenant::Tenant;
use crate::errors::DomainError;

/// Repository contract for tenant records.
///
/// Tenants are provisioned through the admin surface only; the runtime
/// registration path just resolves them by slug.
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Find a tenant by its unique slug
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tenant>, DomainError>;

    /// Find a tenant by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Tenant>, DomainError>;

    /// Persist a new tenant.
    ///
    /// Slug uniqueness is a storage-layer constraint; a collision surfaces
    /// as `DomainError::Conflict`.
    async fn create(&self, tenant: Tenant) -> Result<Tenant, DomainError>;
}
