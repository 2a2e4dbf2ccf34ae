//! Session token minting and validation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for minting and validating session tokens (HS256).
///
/// Holds the encoding and decoding keys derived once from the process-wide
/// secret. Rotating the secret invalidates all outstanding tokens.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from the given configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Mints a session token bound to a verified customer.
    ///
    /// The claim set carries (customer id, email, tenant id) and the
    /// configured validity window.
    pub fn mint(
        &self,
        customer_id: Uuid,
        email: &str,
        tenant_id: Uuid,
    ) -> Result<String, DomainError> {
        let claims = Claims::new_session(
            customer_id,
            email.to_string(),
            tenant_id,
            self.config.ttl_hours,
        );
        self.encode(&claims)
    }

    /// Validates a token's signature and expiry, returning its claims
    pub fn validate(&self, token: &str) -> Result<Claims, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::Expired)
                } else {
                    DomainError::Token(TokenError::Invalid)
                }
            },
        )?;

        Ok(data.claims)
    }

    fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Mint a token with explicit claims. Test seam for expiry behavior.
    #[cfg(test)]
    fn mint_claims(&self, claims: &Claims) -> Result<String, DomainError> {
        self.encode(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(TokenServiceConfig::new("test-secret", 24))
    }

    #[test]
    fn test_mint_validate_round_trip() {
        let service = service();
        let customer_id = Uuid::new_v4();
        let tenant_id = Uuid::new_v4();

        let token = service.mint(customer_id, "a@x.com", tenant_id).unwrap();
        let claims = service.validate(&token).unwrap();

        assert_eq!(claims.customer_id().unwrap(), customer_id);
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.tenant_uuid().unwrap(), tenant_id);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = service();
        let claims = Claims::new_session(
            Uuid::new_v4(),
            "a@x.com".to_string(),
            Uuid::new_v4(),
            -1,
        );
        let token = service.mint_claims(&claims).unwrap();

        let result = service.validate(&token);
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::Expired))
        ));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = service();
        let token = service.mint(Uuid::new_v4(), "a@x.com", Uuid::new_v4()).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('a') { 'b' } else { 'a' });

        assert!(matches!(
            service.validate(&tampered),
            Err(DomainError::Token(TokenError::Invalid))
        ));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let minted_elsewhere = TokenService::new(TokenServiceConfig::new("other-secret", 24))
            .mint(Uuid::new_v4(), "a@x.com", Uuid::new_v4())
            .unwrap();

        assert!(matches!(
            service().validate(&minted_elsewhere),
            Err(DomainError::Token(TokenError::Invalid))
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(service().validate("not-a-jwt").is_err());
    }
}
