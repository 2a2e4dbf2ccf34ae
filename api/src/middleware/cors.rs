//! CORS configuration for cross-origin requests.
//!
//! The onboarding form and the embeddable SDK run on institution-controlled
//! origins, so development is permissive while production restricts origins
//! to the `ALLOWED_ORIGINS` list.
//!
//! # Environment Variables
//! - `ENVIRONMENT`: set to "production" for production settings
//! - `ALLOWED_ORIGINS`: comma-separated list of allowed origins (production)
//! - `CORS_MAX_AGE`: max age for preflight cache (default: 3600 seconds)

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;
use tracing::info;

/// Creates a CORS middleware instance configured for the current environment
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<usize>()
        .unwrap_or(3600);

    if environment == "production" {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

/// Permissive configuration for local development and SDK demos
fn create_development_cors(max_age: usize) -> Cors {
    info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-tenant-slug"),
            header::HeaderName::from_static("x-admin-api-key"),
        ])
        .max_age(max_age)
}

/// Restrictive configuration for production: only origins listed in
/// `ALLOWED_ORIGINS` may call the API
fn create_production_cors(max_age: usize) -> Cors {
    info!("Configuring CORS for production environment");

    let allowed_origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-tenant-slug"),
            header::HeaderName::from_static("x-admin-api-key"),
        ])
        .max_age(max_age);

    for origin in allowed_origins.split(',').filter(|o| !o.trim().is_empty()) {
        cors = cors.allowed_origin(origin.trim());
    }

    cors
}
