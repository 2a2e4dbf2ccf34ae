//! Application state and route configuration.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use kyc_core::repositories::{CustomerRepository, KycSubmissionRepository, TenantRepository};
use kyc_core::services::kyc::KycService;
use kyc_core::services::verification::{OtpTransport, VerificationService};

use crate::routes;

/// Shared services injected into every handler.
///
/// Generic over the repository and transport implementations so the same
/// wiring serves production (MySQL + log transport) and the HTTP tests
/// (in-memory mocks). The token service is registered as its own app data
/// entry because the bearer-token extractor resolves it without knowing
/// these type parameters.
pub struct AppState<C, T, X, K>
where
    C: CustomerRepository,
    T: TenantRepository,
    X: OtpTransport,
    K: KycSubmissionRepository,
{
    pub verification: Arc<VerificationService<C, T, X>>,
    pub kyc: Arc<KycService<K>>,
    pub tenants: Arc<T>,

    /// Tenant slug used when a registration carries no `X-Tenant-Slug`
    pub default_tenant_slug: String,

    /// Key required by the tenant-provisioning admin endpoint
    pub admin_api_key: String,
}

/// Register every route of the public API
pub fn configure_routes<C, T, X, K>(cfg: &mut web::ServiceConfig)
where
    C: CustomerRepository + 'static,
    T: TenantRepository + 'static,
    X: OtpTransport + 'static,
    K: KycSubmissionRepository + 'static,
{
    cfg.route("/health", web::get().to(health_check))
        .service(
            web::scope("/customer")
                .route("/register", web::post().to(routes::customer::register::<C, T, X, K>))
                .route(
                    "/verify-otp",
                    web::post().to(routes::customer::verify_otp::<C, T, X, K>),
                )
                .route(
                    "/resend-otp",
                    web::post().to(routes::customer::resend_otp::<C, T, X, K>),
                )
                .route(
                    "/submit-kyc",
                    web::post().to(routes::customer::submit_kyc::<C, T, X, K>),
                ),
        )
        .service(
            web::scope("/admin")
                .route("/tenants", web::post().to(routes::admin::create_tenant::<C, T, X, K>)),
        )
        .default_service(web::route().to(not_found));
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "kyc-onboard-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "message": "The requested resource was not found"
    }))
}
