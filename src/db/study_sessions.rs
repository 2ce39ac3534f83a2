use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::study_session::{StudySession, StudySessionFilter};

/// Lists the caller's study sessions, optionally narrowed by date range or
/// subject, newest first. The WHERE clause is extended per present filter
/// and values are bound in the same order.
pub async fn list_for_user(
    pool: &SqlitePool,
    user_id: i64,
    filter: &StudySessionFilter,
) -> Result<Vec<StudySession>, AppError> {
    let mut sql = String::from(
        r#"
        SELECT s.id, s.user_id, s.subject_id, s.duration_minutes, s.date,
               s.start_time, s.end_time, s.notes, s.technique, s.created_at,
               sub.name AS subject_name, sub.color AS subject_color
        FROM study_sessions s
        LEFT JOIN subjects sub ON sub.id = s.subject_id
        WHERE s.user_id = ?
        "#,
    );

    if filter.start_date.is_some() {
        sql.push_str(" AND s.date >= ?");
    }
    if filter.end_date.is_some() {
        sql.push_str(" AND s.date <= ?");
    }
    if filter.subject_id.is_some() {
        sql.push_str(" AND s.subject_id = ?");
    }
    sql.push_str(" ORDER BY s.date DESC, s.start_time DESC");

    let mut query = sqlx::query_as::<_, StudySession>(&sql).bind(user_id);
    if let Some(start_date) = &filter.start_date {
        query = query.bind(start_date);
    }
    if let Some(end_date) = &filter.end_date {
        query = query.bind(end_date);
    }
    if let Some(subject_id) = filter.subject_id {
        query = query.bind(subject_id);
    }

    Ok(query.fetch_all(pool).await?)
}

#[allow(clippy::too_many_arguments)]
pub async fn create_study_session(
    pool: &SqlitePool,
    user_id: i64,
    subject_id: i64,
    duration_minutes: i64,
    date: &str,
    start_time: Option<&str>,
    end_time: Option<&str>,
    notes: Option<&str>,
    technique: &str,
) -> Result<i64, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO study_sessions
            (user_id, subject_id, duration_minutes, date, start_time, end_time, notes, technique)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(subject_id)
    .bind(duration_minutes)
    .bind(date)
    .bind(start_time)
    .bind(end_time)
    .bind(notes)
    .bind(technique)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}
