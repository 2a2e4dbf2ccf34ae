//! Bearer-token guard for protected routes.
//!
//! `BearerClaims` is an extractor: a protected handler takes it as an
//! argument and receives the validated session claims, or the request is
//! answered with 401 before the handler runs. Validation is a signature and
//! expiry check against the process-wide [`TokenService`].

use std::future::{ready, Ready};

use actix_web::error::InternalError;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest, HttpResponse};
use tracing::warn;

use kyc_core::domain::entities::token::Claims;
use kyc_core::services::token::TokenService;
use kyc_shared::types::MessageBody;

/// Validated session claims extracted from the Authorization header
#[derive(Debug, Clone)]
pub struct BearerClaims(pub Claims);

impl FromRequest for BearerClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_claims(req).map(BearerClaims))
    }
}

fn extract_claims(req: &HttpRequest) -> Result<Claims, actix_web::Error> {
    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| unauthorized("Authentication is not configured"))?;

    let header = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| unauthorized("Missing bearer token"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Missing bearer token"))?;

    tokens.validate(token).map_err(|e| {
        warn!(error = %e, "bearer token rejected");
        unauthorized("Invalid or expired token")
    })
}

fn unauthorized(message: &str) -> actix_web::Error {
    let response = HttpResponse::Unauthorized().json(MessageBody::new(message));
    InternalError::from_response(message.to_string(), response).into()
}
