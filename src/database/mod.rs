pub mod clubs;
pub mod models;
pub mod projects;

use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;

use crate::config::DatabaseConfig;

/// Errors from the store layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Build the connection pool without touching the database yet.
/// Connections are established on first use, so the process can boot
/// before Postgres is reachable.
pub fn connect_lazy(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(config.connection_timeout))
        .connect_lazy(&config.url)
}

/// Pings the database to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
