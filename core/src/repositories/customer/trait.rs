//! Customer repository trait defining the interface for identity persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::customer::{Customer, PendingRegistration};
use crate::errors::DomainError;

/// Repository contract for customer identity records.
///
/// Implementations must enforce the (tenant, email) uniqueness constraint at
/// the storage layer, and must make `upsert_pending` and `mark_verified`
/// atomic: the verification flow relies on them to resolve concurrent
/// register and verify calls without duplicate rows or double verification.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find a customer by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError>;

    /// Find a customer by tenant and normalized email
    async fn find_by_tenant_and_email(
        &self,
        tenant_id: Uuid,
        email: &str,
    ) -> Result<Option<Customer>, DomainError>;

    /// Find the customer with this email that has not yet verified.
    ///
    /// Verified customers are invisible to this lookup; the verify flow uses
    /// it so that a repeat verification attempt is indistinguishable from
    /// "never registered".
    async fn find_unverified_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Customer>, DomainError>;

    /// Create-or-rearm the identity record for (tenant, email).
    ///
    /// Inserts a new pending record when none exists; otherwise overwrites
    /// phone, both codes, and expiry, and resets the verified flag. The
    /// whole operation is a single atomic write, never check-then-insert.
    /// Returns the record as stored.
    async fn upsert_pending(
        &self,
        pending: &PendingRegistration,
    ) -> Result<Customer, DomainError>;

    /// Conditionally mark a customer verified, clearing OTP state.
    ///
    /// Executes as `update ... where id = ? and verified = false`. Returns
    /// `true` if the row transitioned, `false` if it was already verified
    /// or does not exist; callers treat `false` as "already verified".
    async fn mark_verified(&self, id: Uuid) -> Result<bool, DomainError>;
}
