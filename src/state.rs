use sqlx::PgPool;

use crate::auth::AuthorizationGate;
use crate::config::AppConfig;
use crate::database;

/// Shared per-process context handed to every handler.
///
/// Cheap to clone: the pool is reference-counted and the gate only
/// holds the decoding key.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub gate: AuthorizationGate,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, sqlx::Error> {
        let pool = database::connect_lazy(&config.database)?;
        let gate = AuthorizationGate::new(&config.security.jwt_secret);
        Ok(Self { pool, gate })
    }
}
