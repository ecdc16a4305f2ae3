pub mod auth;

pub use auth::{bearer_credential_middleware, BearerCredential};
