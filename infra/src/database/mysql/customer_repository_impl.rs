//! MySQL implementation of the CustomerRepository trait.
//!
//! The registration upsert and the verification flip are each single SQL
//! statements: the `(tenant_id, email)` unique key makes
//! `INSERT ... ON DUPLICATE KEY UPDATE` the atomic create-or-rearm path, and
//! `mark_verified` asserts the prior state in its `WHERE` clause so
//! concurrent verifications cannot both transition the row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kyc_core::domain::entities::customer::{Customer, PendingRegistration};
use kyc_core::errors::DomainError;
use kyc_core::repositories::CustomerRepository;

/// MySQL implementation of CustomerRepository
pub struct MySqlCustomerRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    /// Create a new MySQL customer repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Customer entity
    fn row_to_customer(row: &sqlx::mysql::MySqlRow) -> Result<Customer, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get id: {}", e),
            })?;
        let tenant_id: String = row
            .try_get("tenant_id")
            .map_err(|e| DomainError::Database {
                message: format!("Failed to get tenant_id: {}", e),
            })?;

        Ok(Customer {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid customer UUID: {}", e),
            })?,
            tenant_id: Uuid::parse_str(&tenant_id).map_err(|e| DomainError::Database {
                message: format!("Invalid tenant UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            phone: row.try_get("phone").map_err(|e| DomainError::Database {
                message: format!("Failed to get phone: {}", e),
            })?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get is_verified: {}", e),
                })?,
            email_otp: row
                .try_get("email_otp")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get email_otp: {}", e),
                })?,
            phone_otp: row
                .try_get("phone_otp")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get phone_otp: {}", e),
                })?,
            otp_expires_at: row
                .try_get::<Option<DateTime<Utc>>, _>("otp_expires_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get otp_expires_at: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    const SELECT_COLUMNS: &'static str = r#"
        SELECT id, tenant_id, email, phone, is_verified,
               email_otp, phone_otp, otp_expires_at,
               created_at, updated_at
        FROM customers
    "#;
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", Self::SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_tenant_and_email(
        &self,
        tenant_id: Uuid,
        email: &str,
    ) -> Result<Option<Customer>, DomainError> {
        let query = format!(
            "{} WHERE tenant_id = ? AND email = ? LIMIT 1",
            Self::SELECT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(tenant_id.to_string())
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_unverified_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Customer>, DomainError> {
        let query = format!(
            "{} WHERE email = ? AND is_verified = FALSE LIMIT 1",
            Self::SELECT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_customer(&row)?)),
            None => Ok(None),
        }
    }

    async fn upsert_pending(
        &self,
        pending: &PendingRegistration,
    ) -> Result<Customer, DomainError> {
        // Atomic create-or-rearm against the (tenant_id, email) unique key.
        // On conflict the generated id is discarded and the existing row is
        // re-armed in place, so no duplicate identity can ever be inserted.
        let query = r#"
            INSERT INTO customers (
                id, tenant_id, email, phone,
                is_verified, email_otp, phone_otp, otp_expires_at,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, FALSE, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                phone = VALUES(phone),
                is_verified = FALSE,
                email_otp = VALUES(email_otp),
                phone_otp = VALUES(phone_otp),
                otp_expires_at = VALUES(otp_expires_at),
                updated_at = VALUES(updated_at)
        "#;

        let now = Utc::now();

        sqlx::query(query)
            .bind(Uuid::new_v4().to_string())
            .bind(pending.tenant_id.to_string())
            .bind(&pending.email)
            .bind(&pending.phone)
            .bind(&pending.email_otp)
            .bind(&pending.phone_otp)
            .bind(pending.otp_expires_at)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to upsert customer: {}", e),
            })?;

        self.find_by_tenant_and_email(pending.tenant_id, &pending.email)
            .await?
            .ok_or_else(|| DomainError::Database {
                message: "Upserted customer row not found".to_string(),
            })
    }

    async fn mark_verified(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE customers SET
                is_verified = TRUE,
                email_otp = NULL,
                phone_otp = NULL,
                otp_expires_at = NULL,
                updated_at = ?
            WHERE id = ? AND is_verified = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to mark customer verified: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
