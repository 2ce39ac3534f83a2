use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::subject::Subject;

pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Subject>, AppError> {
    let subjects = sqlx::query_as::<_, Subject>(
        r#"
        SELECT id, user_id, name, color, created_at
        FROM subjects
        WHERE user_id = ?
        ORDER BY name
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(subjects)
}

/// Fetches a subject only if it belongs to `user_id`. Used to validate
/// subject references on incoming writes.
pub async fn find_owned(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
) -> Result<Option<Subject>, AppError> {
    let subject = sqlx::query_as::<_, Subject>(
        r#"
        SELECT id, user_id, name, color, created_at
        FROM subjects
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(subject)
}

pub async fn create_subject(
    pool: &SqlitePool,
    user_id: i64,
    name: &str,
    color: &str,
) -> Result<i64, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO subjects (user_id, name, color)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(color)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}
