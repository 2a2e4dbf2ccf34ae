use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use kyc_core::services::kyc::KycService;
use kyc_core::services::token::{TokenService, TokenServiceConfig};
use kyc_core::services::verification::VerificationService;
use kyc_infra::database::{
    create_pool, MySqlCustomerRepository, MySqlKycSubmissionRepository, MySqlTenantRepository,
};
use kyc_infra::notify::LogOtpTransport;

use kyc_api::app::{configure_routes, AppState};
use kyc_api::config::ApiConfig;
use kyc_api::middleware::cors::create_cors;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting KycOnboard API server");

    // Configuration is loaded once; a missing JWT secret or admin key
    // aborts startup here instead of degrading at runtime.
    let config = ApiConfig::from_env().context("failed to load configuration")?;

    let pool = create_pool(&config.database)
        .await
        .context("failed to connect to database")?;

    // Repositories
    let customers = Arc::new(MySqlCustomerRepository::new(pool.clone()));
    let tenants = Arc::new(MySqlTenantRepository::new(pool.clone()));
    let submissions = Arc::new(MySqlKycSubmissionRepository::new(pool));

    // Services
    let transport = Arc::new(LogOtpTransport::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::from(&config.jwt)));
    let verification = Arc::new(VerificationService::new(
        customers,
        tenants.clone(),
        transport,
        tokens.clone(),
        config.verification.clone(),
    ));
    let kyc = Arc::new(KycService::new(submissions));

    let state = web::Data::new(AppState {
        verification,
        kyc,
        tenants,
        default_tenant_slug: config.verification.default_tenant_slug.clone(),
        admin_api_key: config.admin_api_key.clone(),
    });
    let token_data = web::Data::from(tokens);

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "server binding");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(create_cors())
            .app_data(state.clone())
            .app_data(token_data.clone())
            .configure(
                configure_routes::<
                    MySqlCustomerRepository,
                    MySqlTenantRepository,
                    LogOtpTransport,
                    MySqlKycSubmissionRepository,
                >,
            )
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
