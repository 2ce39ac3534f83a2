use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::schedule::{ScheduleFilter, ScheduleItem};

/// Lists the caller's schedule items in agenda order. `date` narrows to a
/// single day; `week_start` narrows to `[week_start, week_start + 7 days)`.
pub async fn list_for_user(
    pool: &SqlitePool,
    user_id: i64,
    filter: &ScheduleFilter,
) -> Result<Vec<ScheduleItem>, AppError> {
    let mut sql = String::from(
        r#"
        SELECT sch.id, sch.user_id, sch.subject_id, sch.title, sch.date, sch.time,
               sch.duration_minutes, sch.completed, sch.created_at,
               sub.name AS subject_name, sub.color AS subject_color
        FROM schedule sch
        LEFT JOIN subjects sub ON sub.id = sch.subject_id
        WHERE sch.user_id = ?
        "#,
    );

    if filter.date.is_some() {
        sql.push_str(" AND sch.date = ?");
    }
    if filter.week_start.is_some() {
        sql.push_str(" AND sch.date >= date(?) AND sch.date < date(?, '+7 days')");
    }
    sql.push_str(" ORDER BY sch.date, sch.time");

    let mut query = sqlx::query_as::<_, ScheduleItem>(&sql).bind(user_id);
    if let Some(date) = &filter.date {
        query = query.bind(date);
    }
    if let Some(week_start) = &filter.week_start {
        query = query.bind(week_start).bind(week_start);
    }

    Ok(query.fetch_all(pool).await?)
}

pub async fn create_schedule_item(
    pool: &SqlitePool,
    user_id: i64,
    subject_id: i64,
    title: &str,
    date: &str,
    time: &str,
    duration_minutes: i64,
) -> Result<i64, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO schedule (user_id, subject_id, title, date, time, duration_minutes)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(subject_id)
    .bind(title)
    .bind(date)
    .bind(time)
    .bind(duration_minutes)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Sets the completion flag on an item the caller owns. Returns false when
/// no owned row matched, so the route can answer 404.
pub async fn set_completed(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
    completed: bool,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE schedule SET completed = ?
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(completed)
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
