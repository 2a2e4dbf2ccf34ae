//! Handler for POST /admin/tenants

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::info;
use validator::Validate;

use kyc_core::domain::entities::tenant::Tenant;
use kyc_core::errors::DomainError;
use kyc_core::repositories::{CustomerRepository, KycSubmissionRepository, TenantRepository};
use kyc_core::services::verification::OtpTransport;
use kyc_shared::types::MessageBody;

use crate::app::AppState;
use crate::dto::admin::{CreateTenantRequest, TenantResponse};
use crate::handlers::error::to_response;

use super::ADMIN_API_KEY_HEADER;

/// Provisions a tenant.
///
/// Tenant creation is an explicit administrative action; the runtime
/// registration path only resolves tenants that already exist. Guarded by
/// the configured admin API key.
pub async fn create_tenant<C, T, X, K>(
    req: HttpRequest,
    state: web::Data<AppState<C, T, X, K>>,
    body: web::Json<CreateTenantRequest>,
) -> HttpResponse
where
    C: CustomerRepository + 'static,
    T: TenantRepository + 'static,
    X: OtpTransport + 'static,
    K: KycSubmissionRepository + 'static,
{
    let provided_key = req
        .headers()
        .get(ADMIN_API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided_key != Some(state.admin_api_key.as_str()) {
        return to_response(&DomainError::Unauthorized);
    }

    let request = body.into_inner();
    if request.validate().is_err() {
        return HttpResponse::BadRequest()
            .json(MessageBody::new("Invalid tenant data"));
    }

    let tenant = Tenant::new(request.slug, request.name, request.contact_email);

    match state.tenants.create(tenant).await {
        Ok(created) => {
            info!(tenant = %created.slug, "tenant provisioned");
            HttpResponse::Created().json(TenantResponse::from(created))
        }
        Err(err) => to_response(&err),
    }
}
