//! MySQL connection pool setup.

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use kyc_shared::config::DatabaseConfig;

/// Create a MySQL connection pool from configuration.
///
/// Connects eagerly so a misconfigured database URL fails at startup rather
/// than on the first request.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, sqlx::Error> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "database pool established"
    );

    Ok(pool)
}
