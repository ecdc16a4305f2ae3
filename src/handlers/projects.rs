use std::collections::HashMap;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::database::{self, models::Project};
use crate::error::ApiError;
use crate::middleware::BearerCredential;
use crate::state::AppState;

use super::{check_ownership, parse_payload, required_field};

#[derive(Debug, Deserialize)]
pub struct ProjectPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub contents: Option<String>,
}

impl ProjectPayload {
    fn validated(&self) -> Result<(&str, &str), ApiError> {
        let mut field_errors = HashMap::new();

        let title = required_field(&mut field_errors, "title", self.title.as_deref());
        let contents = required_field(&mut field_errors, "contents", self.contents.as_deref());

        match (title, contents) {
            (Some(title), Some(contents)) => Ok((title, contents)),
            _ => Err(ApiError::validation_error(field_errors)),
        }
    }
}

/// GET /api/clubs/:club_id/projects - List a club's projects (public)
pub async fn list(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = database::projects::list_by_club(&state.pool, club_id).await?;
    Ok(Json(projects))
}

/// POST /api/clubs/:club_id/projects - Create a project (club owners only)
///
/// The club binding comes from the already-authorized path id, not the
/// request body.
pub async fn create(
    State(state): State<AppState>,
    Path(club_id): Path<i64>,
    Extension(BearerCredential(credential)): Extension<BearerCredential>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    check_ownership(&state.gate, credential.as_deref(), club_id, "create")?;

    let payload: ProjectPayload = parse_payload(body)?;
    let (title, contents) = payload.validated()?;

    let project = database::projects::insert(&state.pool, club_id, title, contents).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/clubs/:club_id/projects/:project_id - Project detail (public)
///
/// Looks the project up by its own id; the club path segment is not
/// consulted for reads.
pub async fn get(
    State(state): State<AppState>,
    Path((_club_id, project_id)): Path<(i64, i64)>,
) -> Result<Json<Project>, ApiError> {
    let project = database::projects::fetch(&state.pool, project_id).await?;
    Ok(Json(project))
}

/// PUT /api/clubs/:club_id/projects/:project_id - Update a project (club owners only)
pub async fn update(
    State(state): State<AppState>,
    Path((club_id, project_id)): Path<(i64, i64)>,
    Extension(BearerCredential(credential)): Extension<BearerCredential>,
    Json(body): Json<Value>,
) -> Result<Json<Project>, ApiError> {
    check_ownership(&state.gate, credential.as_deref(), club_id, "update")?;

    // 404 wins over payload validation
    database::projects::fetch(&state.pool, project_id).await?;

    let payload: ProjectPayload = parse_payload(body)?;
    let (title, contents) = payload.validated()?;

    let project = database::projects::update(&state.pool, project_id, title, contents).await?;
    Ok(Json(project))
}

/// DELETE /api/clubs/:club_id/projects/:project_id - Delete a project (club owners only)
pub async fn delete(
    State(state): State<AppState>,
    Path((club_id, project_id)): Path<(i64, i64)>,
    Extension(BearerCredential(credential)): Extension<BearerCredential>,
) -> Result<StatusCode, ApiError> {
    check_ownership(&state.gate, credential.as_deref(), club_id, "delete")?;

    database::projects::fetch(&state.pool, project_id).await?;
    database::projects::delete(&state.pool, project_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_payload() {
        let payload = ProjectPayload {
            title: Some("robot arm".to_string()),
            contents: Some("seasonal build log".to_string()),
        };
        assert_eq!(
            payload.validated().unwrap(),
            ("robot arm", "seasonal build log")
        );
    }

    #[test]
    fn collects_errors_for_every_bad_field() {
        let payload = ProjectPayload {
            title: Some("".to_string()),
            contents: None,
        };
        let err = payload.validated().unwrap_err();
        match err {
            ApiError::ValidationError { field_errors } => {
                assert_eq!(
                    field_errors.get("title").unwrap(),
                    &vec!["This field may not be blank.".to_string()]
                );
                assert_eq!(
                    field_errors.get("contents").unwrap(),
                    &vec!["This field is required.".to_string()]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
