//! Handler for POST /customer/register

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;

use kyc_core::repositories::{CustomerRepository, KycSubmissionRepository, TenantRepository};
use kyc_core::services::verification::OtpTransport;
use kyc_shared::types::MessageBody;

use crate::app::AppState;
use crate::dto::customer::{RegisterRequest, RegisterResponse};
use crate::handlers::error::to_response;

use super::TENANT_SLUG_HEADER;

/// Registers a customer and issues an OTP challenge.
///
/// The tenant is resolved from the `X-Tenant-Slug` header, falling back to
/// the configured default slug. Codes leave the system only through the
/// out-of-band transport; the response carries the customer id alone.
pub async fn register<C, T, X, K>(
    req: HttpRequest,
    state: web::Data<AppState<C, T, X, K>>,
    body: web::Json<RegisterRequest>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    T: TenantRepository + 'static,
    X: OtpTransport + 'static,
    K: KycSubmissionRepository + 'static,
{
    let request = body.into_inner();

    let (email, phone) = match (non_empty(request.email), non_empty(request.phone)) {
        (Some(email), Some(phone)) => (email, phone),
        _ => {
            return HttpResponse::BadRequest()
                .json(MessageBody::new("Email and phone are required"));
        }
    };

    let tenant_slug = tenant_slug(&req, &state.default_tenant_slug);

    info!(tenant = %tenant_slug, "processing registration request");

    match state.verification.register(&tenant_slug, &email, &phone).await {
        Ok(receipt) => HttpResponse::Ok().json(RegisterResponse {
            message: "OTP sent successfully".to_string(),
            customer_id: receipt.customer_id,
        }),
        Err(err) => to_response(&err),
    }
}

/// Resolve the tenant slug for this request
fn tenant_slug(req: &HttpRequest, default_slug: &str) -> String {
    req.headers()
        .get(TENANT_SLUG_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|slug| !slug.is_empty())
        .unwrap_or(default_slug)
        .to_string()
}

/// Treat missing and blank fields alike
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
