//! Handler for POST /customer/resend-otp

use actix_web::{web, HttpResponse};

use kyc_core::repositories::{CustomerRepository, KycSubmissionRepository, TenantRepository};
use kyc_core::services::verification::OtpTransport;
use kyc_shared::types::MessageBody;

use crate::app::AppState;
use crate::dto::customer::{RegisterResponse, ResendOtpRequest};
use crate::handlers::error::to_response;

use super::register::non_empty;

/// Re-issues the OTP challenge for a pending identity
pub async fn resend_otp<C, T, X, K>(
    state: web::Data<AppState<C, T, X, K>>,
    body: web::Json<ResendOtpRequest>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    T: TenantRepository + 'static,
    X: OtpTransport + 'static,
    K: KycSubmissionRepository + 'static,
{
    let email = match non_empty(body.into_inner().email) {
        Some(email) => email,
        None => {
            return HttpResponse::BadRequest().json(MessageBody::new("Email is required"));
        }
    };

    match state.verification.resend(&email).await {
        Ok(receipt) => HttpResponse::Ok().json(RegisterResponse {
            message: "OTP sent successfully".to_string(),
            customer_id: receipt.customer_id,
        }),
        Err(err) => to_response(&err),
    }
}
