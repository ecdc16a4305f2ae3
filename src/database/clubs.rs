use sqlx::PgPool;

use super::models::Club;
use super::DatabaseError;

/// Fetch a club by primary key, signalling NotFound for missing ids
pub async fn fetch(pool: &PgPool, id: i64) -> Result<Club, DatabaseError> {
    let club = sqlx::query_as::<_, Club>("SELECT * FROM tbl_club WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    club.ok_or_else(|| DatabaseError::NotFound(format!("club {} not found", id)))
}

pub async fn insert(pool: &PgPool, name: &str, introduction: &str) -> Result<Club, DatabaseError> {
    let club = sqlx::query_as::<_, Club>(
        "INSERT INTO tbl_club (name, introduction) VALUES ($1, $2) RETURNING *",
    )
    .bind(name)
    .bind(introduction)
    .fetch_one(pool)
    .await?;

    Ok(club)
}

/// Full update of a club introduction
pub async fn update(
    pool: &PgPool,
    id: i64,
    name: &str,
    introduction: &str,
) -> Result<Club, DatabaseError> {
    let club = sqlx::query_as::<_, Club>(
        "UPDATE tbl_club SET name = $2, introduction = $3, updated_at = now() \
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(name)
    .bind(introduction)
    .fetch_optional(pool)
    .await?;

    club.ok_or_else(|| DatabaseError::NotFound(format!("club {} not found", id)))
}
