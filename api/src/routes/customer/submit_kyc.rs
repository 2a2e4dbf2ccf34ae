//! Handler for POST /customer/submit-kyc

use actix_web::{web, HttpResponse};
use validator::Validate;

use kyc_core::domain::entities::kyc::KycDetails;
use kyc_core::repositories::{CustomerRepository, KycSubmissionRepository, TenantRepository};
use kyc_core::services::verification::OtpTransport;
use kyc_shared::types::MessageBody;

use crate::app::AppState;
use crate::dto::customer::SubmitKycRequest;
use crate::handlers::error::to_response;
use crate::middleware::auth::BearerClaims;

/// Accepts the KYC form payload from a verified customer.
///
/// Bearer-token protected: the extractor rejects the request with 401 before
/// this body runs when the token is missing, invalid, or expired.
pub async fn submit_kyc<C, T, X, K>(
    claims: BearerClaims,
    state: web::Data<AppState<C, T, X, K>>,
    body: web::Json<SubmitKycRequest>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    T: TenantRepository + 'static,
    X: OtpTransport + 'static,
    K: KycSubmissionRepository + 'static,
{
    let request = body.into_inner();

    if request.validate().is_err() {
        return HttpResponse::BadRequest().json(MessageBody::new("Invalid KYC form data"));
    }

    let details = KycDetails {
        full_name: request.full_name,
        date_of_birth: request.date_of_birth,
        nationality: request.nationality,
        address_line1: request.address_line1,
        address_line2: request.address_line2,
        city: request.city,
        postal_code: request.postal_code,
        country: request.country,
        id_document_type: request.id_document_type,
        id_document_number: request.id_document_number,
    };

    match state.kyc.submit(&claims.0, details).await {
        Ok(_) => HttpResponse::Ok().json(MessageBody::new("KYC submission received")),
        Err(err) => to_response(&err),
    }
}
