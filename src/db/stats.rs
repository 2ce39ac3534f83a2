//! Weekly aggregation over a user's study sessions.

use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::stats::{DailyTotal, SubjectTotal, WeeklyStats};

/// Aggregates the caller's sessions over `[week_start, week_start + 7 days)`.
///
/// Durations are summed in minutes; `total_hours` is converted and rounded
/// to two decimals. An empty window yields zero totals and empty lists.
pub async fn weekly_stats(
    pool: &SqlitePool,
    user_id: i64,
    week_start: &str,
) -> Result<WeeklyStats, AppError> {
    let total_minutes: Option<i64> = sqlx::query_scalar(
        r#"
        SELECT SUM(duration_minutes)
        FROM study_sessions
        WHERE user_id = ? AND date >= date(?) AND date < date(?, '+7 days')
        "#,
    )
    .bind(user_id)
    .bind(week_start)
    .bind(week_start)
    .fetch_one(pool)
    .await?;

    let by_subject = sqlx::query_as::<_, SubjectTotal>(
        r#"
        SELECT sub.name, sub.color, SUM(s.duration_minutes) AS total_minutes
        FROM study_sessions s
        JOIN subjects sub ON sub.id = s.subject_id
        WHERE s.user_id = ? AND s.date >= date(?) AND s.date < date(?, '+7 days')
        GROUP BY s.subject_id, sub.name, sub.color
        ORDER BY total_minutes DESC
        "#,
    )
    .bind(user_id)
    .bind(week_start)
    .bind(week_start)
    .fetch_all(pool)
    .await?;

    let daily = sqlx::query_as::<_, DailyTotal>(
        r#"
        SELECT date, SUM(duration_minutes) AS total_minutes, COUNT(*) AS session_count
        FROM study_sessions
        WHERE user_id = ? AND date >= date(?) AND date < date(?, '+7 days')
        GROUP BY date
        ORDER BY date
        "#,
    )
    .bind(user_id)
    .bind(week_start)
    .bind(week_start)
    .fetch_all(pool)
    .await?;

    let total_hours = (total_minutes.unwrap_or(0) as f64 / 60.0 * 100.0).round() / 100.0;

    Ok(WeeklyStats {
        total_hours,
        by_subject,
        daily,
    })
}
