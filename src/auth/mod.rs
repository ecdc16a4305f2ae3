use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claim set carried by a club bearer token.
///
/// `club_id` is optional on the wire: a token minted without a club
/// affiliation decodes to `None`, which can never match a requested
/// club id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club_id: Option<i64>,
    pub exp: i64,
    pub orig_iat: i64,
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// Credential failed to decode: bad signature, malformed, or expired
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Credential decoded, but its club does not match the requested one
    #[error("club ownership mismatch")]
    Forbidden,
}

/// Ownership-verification gate for club-scoped write operations.
///
/// Decodes an HS256 bearer credential with the process-wide secret and
/// compares the embedded `club_id` claim against the club targeted by
/// the request path. Stateless; one instance is shared by all requests.
#[derive(Clone)]
pub struct AuthorizationGate {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthorizationGate {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }

    /// Validate `credential` and check that it grants access to
    /// `requested_club_id`.
    ///
    /// Any decode failure (signature, structure, expiry) maps to
    /// `AuthError::InvalidToken`; a decoded claim set whose `club_id`
    /// differs from, or lacks, the requested id maps to
    /// `AuthError::Forbidden`. Pure function of its inputs and the key.
    pub fn authorize(&self, credential: &str, requested_club_id: i64) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(credential, &self.decoding_key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let claims = token_data.claims;
        if claims.club_id == Some(requested_club_id) {
            Ok(claims)
        } else {
            Err(AuthError::Forbidden)
        }
    }
}
