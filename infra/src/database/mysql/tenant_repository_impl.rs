//! MySQL implementation of the TenantRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kyc_core::domain::entities::tenant::Tenant;
use kyc_core::errors::DomainError;
use kyc_core::repositories::TenantRepository;

/// MySQL implementation of TenantRepository
pub struct MySqlTenantRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTenantRepository {
    /// Create a new MySQL tenant repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Tenant entity
    fn row_to_tenant(row: &sqlx::mysql::MySqlRow) -> Result<Tenant, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Tenant {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid tenant UUID: {}", e),
            })?,
            slug: row.try_get("slug").map_err(|e| DomainError::Database {
                message: format!("Failed to get slug: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Database {
                message: format!("Failed to get name: {}", e),
            })?,
            contact_email: row
                .try_get("contact_email")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get contact_email: {}", e),
                })?,
            api_key: row.try_get("api_key").map_err(|e| DomainError::Database {
                message: format!("Failed to get api_key: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl TenantRepository for MySqlTenantRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tenant>, DomainError> {
        let query = r#"
            SELECT id, slug, name, contact_email, api_key, created_at
            FROM tenants
            WHERE slug = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_tenant(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Tenant>, DomainError> {
        let query = r#"
            SELECT id, slug, name, contact_email, api_key, created_at
            FROM tenants
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_tenant(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, tenant: Tenant) -> Result<Tenant, DomainError> {
        let query = r#"
            INSERT INTO tenants (id, slug, name, contact_email, api_key, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(tenant.id.to_string())
            .bind(&tenant.slug)
            .bind(&tenant.name)
            .bind(&tenant.contact_email)
            .bind(&tenant.api_key)
            .bind(tenant.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db_err) if db_err.is_unique_violation() => DomainError::Conflict {
                    message: format!("Tenant slug already exists: {}", tenant.slug),
                },
                _ => DomainError::Database {
                    message: format!("Failed to create tenant: {}", e),
                },
            })?;

        Ok(tenant)
    }
}
