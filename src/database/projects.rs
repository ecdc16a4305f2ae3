use sqlx::PgPool;

use super::models::Project;
use super::DatabaseError;

/// All projects belonging to a club, oldest first
pub async fn list_by_club(pool: &PgPool, club_id: i64) -> Result<Vec<Project>, DatabaseError> {
    let projects = sqlx::query_as::<_, Project>(
        "SELECT * FROM tbl_project_introduction WHERE club_id = $1 ORDER BY id",
    )
    .bind(club_id)
    .fetch_all(pool)
    .await?;

    Ok(projects)
}

/// Fetch a project by primary key, signalling NotFound for missing ids
pub async fn fetch(pool: &PgPool, id: i64) -> Result<Project, DatabaseError> {
    let project = sqlx::query_as::<_, Project>("SELECT * FROM tbl_project_introduction WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    project.ok_or_else(|| DatabaseError::NotFound(format!("project {} not found", id)))
}

pub async fn insert(
    pool: &PgPool,
    club_id: i64,
    title: &str,
    contents: &str,
) -> Result<Project, DatabaseError> {
    let project = sqlx::query_as::<_, Project>(
        "INSERT INTO tbl_project_introduction (club_id, title, contents) \
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(club_id)
    .bind(title)
    .bind(contents)
    .fetch_one(pool)
    .await?;

    Ok(project)
}

/// Full update of a project introduction
pub async fn update(
    pool: &PgPool,
    id: i64,
    title: &str,
    contents: &str,
) -> Result<Project, DatabaseError> {
    let project = sqlx::query_as::<_, Project>(
        "UPDATE tbl_project_introduction SET title = $2, contents = $3, updated_at = now() \
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(title)
    .bind(contents)
    .fetch_optional(pool)
    .await?;

    project.ok_or_else(|| DatabaseError::NotFound(format!("project {} not found", id)))
}

/// Delete a project; returns whether a row existed
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, DatabaseError> {
    let result = sqlx::query("DELETE FROM tbl_project_introduction WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
