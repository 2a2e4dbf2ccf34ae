//! Handler for POST /customer/verify-otp

use actix_web::{web, HttpResponse};

use kyc_core::repositories::{CustomerRepository, KycSubmissionRepository, TenantRepository};
use kyc_core::services::verification::OtpTransport;
use kyc_shared::types::MessageBody;

use crate::app::AppState;
use crate::dto::customer::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::error::to_response;

use super::register::non_empty;

/// Verifies a submitted OTP pair and returns a session token.
///
/// Only unverified identities match; retrying after success yields the same
/// 404 an unknown email does.
pub async fn verify_otp<C, T, X, K>(
    state: web::Data<AppState<C, T, X, K>>,
    body: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    T: TenantRepository + 'static,
    X: OtpTransport + 'static,
    K: KycSubmissionRepository + 'static,
{
    let request = body.into_inner();

    let (email, email_otp, phone_otp) = match (
        non_empty(request.email),
        non_empty(request.email_otp),
        non_empty(request.phone_otp),
    ) {
        (Some(email), Some(email_otp), Some(phone_otp)) => (email, email_otp, phone_otp),
        _ => {
            return HttpResponse::BadRequest()
                .json(MessageBody::new("Email and both OTPs are required"));
        }
    };

    match state.verification.verify(&email, &email_otp, &phone_otp).await {
        Ok(session) => HttpResponse::Ok().json(VerifyOtpResponse {
            message: "OTP verified successfully".to_string(),
            token: session.token,
            customer: session.customer,
        }),
        Err(err) => to_response(&err),
    }
}
