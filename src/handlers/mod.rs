use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::auth::{AuthError, AuthorizationGate, Claims};
use crate::error::ApiError;

pub mod clubs;
pub mod projects;

/// Run the ownership gate for a club-scoped write operation.
///
/// Both gate outcomes surface as 401; the denial reason only shows up
/// in the `error_message` body. A missing credential is treated like
/// an undecodable one.
pub fn check_ownership(
    gate: &AuthorizationGate,
    credential: Option<&str>,
    club_id: i64,
    action: &'static str,
) -> Result<Claims, ApiError> {
    let token = credential.ok_or_else(|| {
        debug!("missing bearer credential for {} on club {}", action, club_id);
        ApiError::unauthorized("Invalid authentication token")
    })?;

    match gate.authorize(token, club_id) {
        Ok(claims) => {
            debug!(user = %claims.username, club_id, "ownership verified for {}", action);
            Ok(claims)
        }
        Err(AuthError::Forbidden) => Err(ApiError::unauthorized(format!(
            "You don't have permission to {}",
            action
        ))),
        Err(AuthError::InvalidToken(reason)) => {
            debug!(
                "credential rejected for {} on club {}: {}",
                action, club_id, reason
            );
            Err(ApiError::unauthorized("Invalid authentication token"))
        }
    }
}

/// Deserialize the request body after the gate has run, so that
/// authorization failures win over malformed payloads
pub(crate) fn parse_payload<T: serde::de::DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body)
        .map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e)))
}

/// Required-field check: absent and blank values are reported
/// per-field with the messages existing clients already parse
pub(crate) fn required_field<'a>(
    field_errors: &mut HashMap<String, Vec<String>>,
    field: &str,
    value: Option<&'a str>,
) -> Option<&'a str> {
    match value {
        None => {
            field_errors.insert(
                field.to_string(),
                vec!["This field is required.".to_string()],
            );
            None
        }
        Some(v) if v.trim().is_empty() => {
            field_errors.insert(
                field.to_string(),
                vec!["This field may not be blank.".to_string()],
            );
            None
        }
        Some(v) => Some(v),
    }
}
