//! Session token claims for verified customers.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT issuer
pub const JWT_ISSUER: &str = "kyc-onboard";

/// Claims carried by a session token.
///
/// A token binds a verified customer to their tenant for the configured
/// validity window. Tokens are never persisted; they are reconstructed from
/// the signature on each use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (customer ID)
    pub sub: String,

    /// Verified contact email
    pub email: String,

    /// Owning tenant ID
    pub tenant_id: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for a newly verified customer
    pub fn new_session(customer_id: Uuid, email: String, tenant_id: Uuid, ttl_hours: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::hours(ttl_hours);

        Self {
            sub: customer_id.to_string(),
            email,
            tenant_id: tenant_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Gets the customer ID from the claims
    pub fn customer_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Gets the tenant ID from the claims
    pub fn tenant_uuid(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.tenant_id)
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_claims() {
        let customer_id = Uuid::new_v4();
        let tenant_id = Uuid::new_v4();
        let claims =
            Claims::new_session(customer_id, "a@x.com".to_string(), tenant_id, 24);

        assert_eq!(claims.customer_id().unwrap(), customer_id);
        assert_eq!(claims.tenant_uuid().unwrap(), tenant_id);
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_claims() {
        let claims = Claims::new_session(
            Uuid::new_v4(),
            "a@x.com".to_string(),
            Uuid::new_v4(),
            0,
        );
        assert!(claims.is_expired());
    }

    #[test]
    fn test_jti_is_unique_per_token() {
        let customer_id = Uuid::new_v4();
        let tenant_id = Uuid::new_v4();
        let a = Claims::new_session(customer_id, "a@x.com".to_string(), tenant_id, 24);
        let b = Claims::new_session(customer_id, "a@x.com".to_string(), tenant_id, 24);
        assert_ne!(a.jti, b.jti);
    }
}
