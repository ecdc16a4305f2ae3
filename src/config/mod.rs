use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Errors raised while assembling the configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Seconds to wait for a pooled connection before giving up
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Process-wide HS256 signing secret shared with the token issuer
    pub jwt_secret: String,
}

impl AppConfig {
    /// Build the configuration from the environment.
    ///
    /// The value is constructed once in `main` and handed down through
    /// `AppState`; nothing reads configuration from ambient globals.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        let url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let connection_timeout = env::var("DATABASE_CONNECTION_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("JWT_SECRET"));
        }

        Ok(Self {
            environment,
            database: DatabaseConfig {
                url,
                max_connections,
                connection_timeout,
            },
            security: SecurityConfig { jwt_secret },
        })
    }
}
