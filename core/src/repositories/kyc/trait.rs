//! KYC submission repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::kyc::KycSubmission;
use crate::errors::DomainError;

/// Repository contract for KYC form submissions.
///
/// One submission per customer; saving again replaces the previous one.
#[async_trait]
pub trait KycSubmissionRepository: Send + Sync {
    /// Persist a submission, replacing any earlier one for the customer
    async fn save(&self, submission: KycSubmission) -> Result<KycSubmission, DomainError>;

    /// Find the current submission for a customer
    async fn find_by_customer(
        &self,
        customer_id: Uuid,
    ) -> Result<Option<KycSubmission>, DomainError>;
}
