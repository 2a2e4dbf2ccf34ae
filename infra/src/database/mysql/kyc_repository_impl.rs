//! MySQL implementation of the KycSubmissionRepository trait.
//!
//! One submission row per customer; resubmission replaces the stored
//! details through the same upsert used for first-time submissions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kyc_core::domain::entities::kyc::{KycDetails, KycSubmission};
use kyc_core::errors::DomainError;
use kyc_core::repositories::KycSubmissionRepository;

/// MySQL implementation of KycSubmissionRepository
pub struct MySqlKycSubmissionRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlKycSubmissionRepository {
    /// Create a new MySQL KYC submission repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to KycSubmission entity
    fn row_to_submission(row: &sqlx::mysql::MySqlRow) -> Result<KycSubmission, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;
        let customer_id: String =
            row.try_get("customer_id").map_err(|e| DomainError::Database {
                message: format!("Failed to get customer_id: {}", e),
            })?;
        let tenant_id: String = row.try_get("tenant_id").map_err(|e| DomainError::Database {
            message: format!("Failed to get tenant_id: {}", e),
        })?;
        let details_json: String =
            row.try_get("details").map_err(|e| DomainError::Database {
                message: format!("Failed to get details: {}", e),
            })?;

        let details: KycDetails =
            serde_json::from_str(&details_json).map_err(|e| DomainError::Database {
                message: format!("Stored KYC details are malformed: {}", e),
            })?;

        Ok(KycSubmission {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid submission UUID: {}", e),
            })?,
            customer_id: Uuid::parse_str(&customer_id).map_err(|e| DomainError::Database {
                message: format!("Invalid customer UUID: {}", e),
            })?,
            tenant_id: Uuid::parse_str(&tenant_id).map_err(|e| DomainError::Database {
                message: format!("Invalid tenant UUID: {}", e),
            })?,
            details,
            submitted_at: row
                .try_get::<DateTime<Utc>, _>("submitted_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get submitted_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl KycSubmissionRepository for MySqlKycSubmissionRepository {
    async fn save(&self, submission: KycSubmission) -> Result<KycSubmission, DomainError> {
        let details_json =
            serde_json::to_string(&submission.details).map_err(|e| DomainError::Internal {
                message: format!("Failed to serialize KYC details: {}", e),
            })?;

        // customer_id carries a unique key; resubmission overwrites in place
        let query = r#"
            INSERT INTO kyc_submissions (id, customer_id, tenant_id, details, submitted_at)
            VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                details = VALUES(details),
                submitted_at = VALUES(submitted_at)
        "#;

        sqlx::query(query)
            .bind(submission.id.to_string())
            .bind(submission.customer_id.to_string())
            .bind(submission.tenant_id.to_string())
            .bind(&details_json)
            .bind(submission.submitted_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to save KYC submission: {}", e),
            })?;

        Ok(submission)
    }

    async fn find_by_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Option<KycSubmission>, DomainError> {
        let query = r#"
            SELECT id, customer_id, tenant_id, details, submitted_at
            FROM kyc_submissions
            WHERE customer_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(customer_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_submission(&row)?)),
            None => Ok(None),
        }
    }
}
