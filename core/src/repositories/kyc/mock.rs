//! In-memory implementation of KycSubmissionRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::kyc::KycSubmission;
use crate::errors::DomainError;

use super::trait_::KycSubmissionRepository;

/// In-memory KYC submission store, keyed by customer
pub struct InMemoryKycSubmissionRepository {
    submissions: Arc<RwLock<HashMap<Uuid, KycSubmission>>>,
}

impl InMemoryKycSubmissionRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            submissions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryKycSubmissionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KycSubmissionRepository for InMemoryKycSubmissionRepository {
    async fn save(&self, submission: KycSubmission) -> Result<KycSubmission, DomainError> {
        let mut submissions = self.submissions.write().await;
        submissions.insert(submission.customer_id, submission.clone());
        Ok(submission)
    }

    async fn find_by_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Option<KycSubmission>, DomainError> {
        let submissions = self.submissions.read().await;
        Ok(submissions.get(&customer_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::kyc::KycDetails;
    use chrono::NaiveDate;

    fn details(name: &str) -> KycDetails {
        KycDetails {
            full_name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 2).unwrap(),
            nationality: "AU".to_string(),
            address_line1: "1 Example St".to_string(),
            address_line2: None,
            city: "Sydney".to_string(),
            postal_code: "2000".to_string(),
            country: "AU".to_string(),
            id_document_type: "passport".to_string(),
            id_document_number: "PA1234567".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_replaces_previous_submission() {
        let repo = InMemoryKycSubmissionRepository::new();
        let customer_id = Uuid::new_v4();
        let tenant_id = Uuid::new_v4();

        repo.save(KycSubmission::new(customer_id, tenant_id, details("Jane Doe")))
            .await
            .unwrap();
        repo.save(KycSubmission::new(customer_id, tenant_id, details("Jane D. Doe")))
            .await
            .unwrap();

        let stored = repo.find_by_customer(customer_id).await.unwrap().unwrap();
        assert_eq!(stored.details.full_name, "Jane D. Doe");
    }
}
