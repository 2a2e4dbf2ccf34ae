//! Result of a successful OTP verification.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::customer::Customer;

/// The public projection of a customer returned to API callers.
///
/// Deliberately excludes tenant internals and all OTP state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id: Uuid,
    pub email: String,
    pub phone: String,
}

impl From<&Customer> for CustomerProfile {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            email: customer.email.clone(),
            phone: customer.phone.clone(),
        }
    }
}

/// A minted session token together with the verified customer's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedSession {
    /// Signed bearer token for subsequent requests
    pub token: String,

    /// Public projection of the verified customer
    pub customer: CustomerProfile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::customer::PendingRegistration;
    use chrono::{Duration, Utc};

    #[test]
    fn test_profile_excludes_otp_state() {
        let customer = Customer::new_pending(&PendingRegistration {
            tenant_id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            phone: "555-0100".to_string(),
            email_otp: "123456".to_string(),
            phone_otp: "654321".to_string(),
            otp_expires_at: Utc::now() + Duration::minutes(10),
        });

        let profile = CustomerProfile::from(&customer);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["email"], "a@x.com");
        assert!(json.get("email_otp").is_none());
        assert!(json.get("tenant_id").is_none());
    }
}
