//! Maps domain errors onto HTTP responses.
//!
//! This is the only place status codes are assigned. Storage and other
//! internal failures are logged here and surfaced as a generic message so no
//! internal detail leaks into a response body.

use actix_web::HttpResponse;
use tracing::error;

use kyc_core::errors::{DomainError, TokenError, VerificationError};
use kyc_shared::types::MessageBody;

/// Convert a domain error into the HTTP response the API contract documents
pub fn to_response(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(MessageBody::new(message.clone()))
        }

        DomainError::Verification(verification) => match verification {
            VerificationError::CustomerNotFound => {
                HttpResponse::NotFound().json(MessageBody::new(verification.to_string()))
            }
            VerificationError::OtpExpired | VerificationError::InvalidOtp => {
                HttpResponse::BadRequest().json(MessageBody::new(verification.to_string()))
            }
            VerificationError::AlreadyVerified => {
                HttpResponse::Conflict().json(MessageBody::new(verification.to_string()))
            }
            VerificationError::TenantNotConfigured { .. } => HttpResponse::ServiceUnavailable()
                .json(MessageBody::new(verification.to_string())),
            VerificationError::DuplicateIdentity => internal(err),
        },

        DomainError::Token(token) => match token {
            TokenError::Expired | TokenError::Invalid => {
                HttpResponse::Unauthorized().json(MessageBody::new("Invalid or expired token"))
            }
            TokenError::GenerationFailed => internal(err),
        },

        DomainError::NotFound { resource } => HttpResponse::NotFound()
            .json(MessageBody::new(format!("{} not found", resource))),

        DomainError::Conflict { message } => {
            HttpResponse::Conflict().json(MessageBody::new(message.clone()))
        }

        DomainError::Unauthorized => {
            HttpResponse::Unauthorized().json(MessageBody::new("Unauthorized"))
        }

        DomainError::Database { .. } | DomainError::Internal { .. } => internal(err),
    }
}

fn internal(err: &DomainError) -> HttpResponse {
    error!(error = %err, "request failed with internal error");
    HttpResponse::InternalServerError().json(MessageBody::new("Internal server error"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_verification_error_statuses() {
        let cases = [
            (VerificationError::CustomerNotFound, StatusCode::NOT_FOUND),
            (VerificationError::OtpExpired, StatusCode::BAD_REQUEST),
            (VerificationError::InvalidOtp, StatusCode::BAD_REQUEST),
            (VerificationError::AlreadyVerified, StatusCode::CONFLICT),
            (
                VerificationError::TenantNotConfigured {
                    slug: "default".to_string(),
                },
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (err, status) in cases {
            let response = to_response(&DomainError::Verification(err));
            assert_eq!(response.status(), status);
        }
    }

    #[actix_web::test]
    async fn test_internal_errors_do_not_leak_detail() {
        let err = DomainError::Database {
            message: "connection refused to mysql://user:pass@db".to_string(),
        };
        let response = to_response(&err);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("Internal server error"));
        assert!(!text.contains("mysql"));
    }

    #[test]
    fn test_token_errors_are_unauthorized() {
        let response = to_response(&DomainError::Token(TokenError::Expired));
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
