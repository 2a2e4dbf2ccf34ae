//! KYC form submission entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The data-collection fields a customer fills in after verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycDetails {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub id_document_type: String,
    pub id_document_number: String,
}

/// A stored KYC submission, one row per customer.
///
/// Resubmitting replaces the customer's previous submission in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KycSubmission {
    /// Unique identifier for the submission
    pub id: Uuid,

    /// Customer the submission belongs to
    pub customer_id: Uuid,

    /// Tenant scope, denormalized from the session claims
    pub tenant_id: Uuid,

    /// The collected form fields
    pub details: KycDetails,

    /// Timestamp when the submission was received
    pub submitted_at: DateTime<Utc>,
}

impl KycSubmission {
    /// Creates a new submission for a verified customer
    pub fn new(customer_id: Uuid, tenant_id: Uuid, details: KycDetails) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            tenant_id,
            details,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> KycDetails {
        KycDetails {
            full_name: "Jane Doe".to_string(),
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

    #[test]
    fn test_new_submission() {
        let customer_id = Uuid::new_v4();
        let tenant_id = Uuid::new_v4();
        let submission = KycSubmission::new(customer_id, tenant_id, details());

        assert_eq!(submission.customer_id, customer_id);
        assert_eq!(submission.tenant_id, tenant_id);
        assert_eq!(submission.details.full_name, "Jane Doe");
    }
}
