//! Shared fixtures for the HTTP-level tests: an application wired against
//! the in-memory repositories and the capturing OTP transport.

// Each test binary compiles this module separately and uses a subset of it.
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use kyc_core::domain::entities::tenant::Tenant;
use kyc_core::repositories::customer::InMemoryCustomerRepository;
use kyc_core::repositories::kyc::InMemoryKycSubmissionRepository;
use kyc_core::repositories::tenant::InMemoryTenantRepository;
use kyc_core::services::kyc::KycService;
use kyc_core::services::token::{TokenService, TokenServiceConfig};
use kyc_core::services::verification::mock::CapturingOtpTransport;
use kyc_core::services::verification::VerificationService;
use kyc_shared::config::VerificationConfig;

use kyc_api::app::{configure_routes, AppState};

pub const ADMIN_KEY: &str = "test-admin-key";
pub const JWT_SECRET: &str = "test-secret";

pub type TestState = AppState<
    InMemoryCustomerRepository,
    InMemoryTenantRepository,
    CapturingOtpTransport,
    InMemoryKycSubmissionRepository,
>;

pub struct TestHarness {
    pub customers: Arc<InMemoryCustomerRepository>,
    pub submissions: Arc<InMemoryKycSubmissionRepository>,
    pub transport: Arc<CapturingOtpTransport>,
    pub tokens: Arc<TokenService>,
    pub state: web::Data<TestState>,
    pub tenant: Tenant,
}

/// Build a harness with one provisioned tenant under the default slug
pub async fn harness() -> TestHarness {
    let tenant = Tenant::new(
        "default".to_string(),
        "Demo Bank".to_string(),
        "admin@demobank.com".to_string(),
    );

    let customers = Arc::new(InMemoryCustomerRepository::new());
    let tenants =
        Arc::new(InMemoryTenantRepository::with_tenants(vec![tenant.clone()]).await);
    let submissions = Arc::new(InMemoryKycSubmissionRepository::new());
    let transport = Arc::new(CapturingOtpTransport::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new(JWT_SECRET, 24)));

    let verification = Arc::new(VerificationService::new(
        customers.clone(),
        tenants.clone(),
        transport.clone(),
        tokens.clone(),
        VerificationConfig::default(),
    ));
    let kyc = Arc::new(KycService::new(submissions.clone()));

    let state = web::Data::new(AppState {
        verification,
        kyc,
        tenants,
        default_tenant_slug: "default".to_string(),
        admin_api_key: ADMIN_KEY.to_string(),
    });

    TestHarness {
        customers,
        submissions,
        transport,
        tokens,
        state,
        tenant,
    }
}

/// Assemble the application exactly as the binary does, minus CORS
pub fn create_test_app(
    harness: &TestHarness,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    actix_web::App::new()
        .app_data(harness.state.clone())
        .app_data(web::Data::from(harness.tokens.clone()))
        .configure(
            configure_routes::<
                InMemoryCustomerRepository,
                InMemoryTenantRepository,
                CapturingOtpTransport,
                InMemoryKycSubmissionRepository,
            >,
        )
}

/// The most recent code pair delivered to (email, phone)
pub async fn delivered_codes(
    harness: &TestHarness,
    email: &str,
    phone: &str,
) -> (String, String) {
    let email_code = harness
        .transport
        .last_code_for("email", email)
        .await
        .expect("email code delivered");
    let phone_code = harness
        .transport
        .last_code_for("phone", phone)
        .await
        .expect("phone code delivered");
    (email_code, phone_code)
}
