//! In-memory implementation of TenantRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::tenant::Tenant;
use crate::errors::DomainError;

use super::trait_::TenantRepository;

/// In-memory tenant repository
pub struct InMemoryTenantRepository {
    tenants: Arc<RwLock<HashMap<Uuid, Tenant>>>,
}

impl InMemoryTenantRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            tenants: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository pre-seeded with the given tenants
    pub async fn with_tenants(tenants: Vec<Tenant>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.tenants.write().await;
            for tenant in tenants {
                map.insert(tenant.id, tenant);
            }
        }
        repo
    }
}

impl Default for InMemoryTenantRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tenant>, DomainError> {
        let tenants = self.tenants.read().await;
        Ok(tenants.values().find(|t| t.slug == slug).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Tenant>, DomainError> {
        let tenants = self.tenants.read().await;
        Ok(tenants.get(&id).cloned())
    }

    async fn create(&self, tenant: Tenant) -> Result<Tenant, DomainError> {
        let mut tenants = self.tenants.write().await;

        if tenants.values().any(|t| t.slug == tenant.slug) {
            return Err(DomainError::Conflict {
                message: format!("Tenant slug already exists: {}", tenant.slug),
            });
        }

        tenants.insert(tenant.id, tenant.clone());
        Ok(tenant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find_by_slug() {
        let repo = InMemoryTenantRepository::new();
        let tenant = Tenant::new(
            "demo-bank".to_string(),
            "Demo Bank".to_string(),
            "admin@demobank.com".to_string(),
        );

        repo.create(tenant.clone()).await.unwrap();

        let found = repo.find_by_slug("demo-bank").await.unwrap().unwrap();
        assert_eq!(found.id, tenant.id);
        assert!(repo.find_by_slug("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_slug_conflicts() {
        let repo = InMemoryTenantRepository::new();
        repo.create(Tenant::new(
            "demo-bank".to_string(),
            "Demo Bank".to_string(),
            "admin@demobank.com".to_string(),
        ))
        .await
        .unwrap();

        let result = repo
            .create(Tenant::new(
                "demo-bank".to_string(),
                "Other Bank".to_string(),
                "admin@other.com".to_string(),
            ))
            .await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }
}
