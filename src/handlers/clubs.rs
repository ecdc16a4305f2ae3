use std::collections::HashMap;

use axum::{
    extract::{Extension, Path, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::database::{self, models::Club};
use crate::error::ApiError;
use crate::middleware::BearerCredential;
use crate::state::AppState;

use super::{check_ownership, parse_payload, required_field};

#[derive(Debug, Deserialize)]
pub struct ClubPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub introduction: Option<String>,
}

impl ClubPayload {
    fn validated(&self) -> Result<(&str, &str), ApiError> {
        let mut field_errors = HashMap::new();

        let name = required_field(&mut field_errors, "name", self.name.as_deref());
        let introduction =
            required_field(&mut field_errors, "introduction", self.introduction.as_deref());

        match (name, introduction) {
            (Some(name), Some(introduction)) => Ok((name, introduction)),
            _ => Err(ApiError::validation_error(field_errors)),
        }
    }
}

/// GET /api/clubs/:club_id - Club introduction (public)
pub async fn get(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
) -> Result<Json<Club>, ApiError> {
    let club = database::clubs::fetch(&state.pool, club_id).await?;
    Ok(Json(club))
}

/// POST /api/clubs/:club_id - Create a club introduction (club owners only)
///
/// Answers 200 rather than 201; existing clients depend on it.
pub async fn create(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
    Extension(BearerCredential(credential)): Extension<BearerCredential>,
    Json(body): Json<Value>,
) -> Result<Json<Club>, ApiError> {
    check_ownership(&state.gate, credential.as_deref(), club_id, "create")?;

    let payload: ClubPayload = parse_payload(body)?;
    let (name, introduction) = payload.validated()?;

    let club = database::clubs::insert(&state.pool, name, introduction).await?;
    Ok(Json(club))
}

/// PUT /api/clubs/:club_id - Update a club introduction (club owners only)
pub async fn update(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
    Extension(BearerCredential(credential)): Extension<BearerCredential>,
    Json(body): Json<Value>,
) -> Result<Json<Club>, ApiError> {
    check_ownership(&state.gate, credential.as_deref(), club_id, "update")?;

    // 404 wins over payload validation
    database::clubs::fetch(&state.pool, club_id).await?;

    let payload: ClubPayload = parse_payload(body)?;
    let (name, introduction) = payload.validated()?;

    let club = database::clubs::update(&state.pool, club_id, name, introduction).await?;
    Ok(Json(club))
}
