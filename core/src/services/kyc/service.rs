//! Accepts KYC form submissions from verified customers.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::kyc::{KycDetails, KycSubmission};
use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::KycSubmissionRepository;

/// Stores KYC form payloads on behalf of verified customers.
///
/// The caller has already validated the bearer token; this service binds the
/// payload to the identity in the claims and hands it to downstream storage.
pub struct KycService<K: KycSubmissionRepository> {
    submissions: Arc<K>,
}

impl<K: KycSubmissionRepository> KycService<K> {
    /// Create a new KYC service
    pub fn new(submissions: Arc<K>) -> Self {
        Self { submissions }
    }

    /// Persist a submission for the customer identified by the claims
    pub async fn submit(&self, claims: &Claims, details: KycDetails) -> DomainResult<KycSubmission> {
        let customer_id = claims
            .customer_id()
            .map_err(|_| DomainError::Token(TokenError::Invalid))?;
        let tenant_id = claims
            .tenant_uuid()
            .map_err(|_| DomainError::Token(TokenError::Invalid))?;

        let submission = self
            .submissions
            .save(KycSubmission::new(customer_id, tenant_id, details))
            .await?;

        info!(customer_id = %customer_id, "KYC submission stored");

        Ok(submission)
    }
}
