use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::note::Note;

/// Lists the caller's notes, most recently updated first.
pub async fn list_for_user(
    pool: &SqlitePool,
    user_id: i64,
    subject_id: Option<i64>,
) -> Result<Vec<Note>, AppError> {
    let mut sql = String::from(
        r#"
        SELECT n.id, n.user_id, n.subject_id, n.title, n.content,
               n.created_at, n.updated_at,
               sub.name AS subject_name, sub.color AS subject_color
        FROM notes n
        LEFT JOIN subjects sub ON sub.id = n.subject_id
        WHERE n.user_id = ?
        "#,
    );

    if subject_id.is_some() {
        sql.push_str(" AND n.subject_id = ?");
    }
    sql.push_str(" ORDER BY n.updated_at DESC");

    let mut query = sqlx::query_as::<_, Note>(&sql).bind(user_id);
    if let Some(subject_id) = subject_id {
        query = query.bind(subject_id);
    }

    Ok(query.fetch_all(pool).await?)
}

pub async fn create_note(
    pool: &SqlitePool,
    user_id: i64,
    subject_id: i64,
    title: &str,
    content: &str,
) -> Result<i64, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO notes (user_id, subject_id, title, content)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(subject_id)
    .bind(title)
    .bind(content)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}
