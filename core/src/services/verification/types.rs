//! Result types returned by the verification service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Acknowledgement of a registration or resend.
///
/// Carries only the opaque identity reference, never the codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    /// Identifier of the pending customer record
    pub customer_id: Uuid,
}
