use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use crate::{
    db::stats as db_stats,
    error::AppError,
    middleware::auth::AuthUser,
    models::stats::{WeeklyStats, WeeklyStatsQuery},
    routes::AppState,
};

/// `GET /api/stats/weekly` — aggregates the caller's study sessions over
/// `[week_start, week_start + 7 days)`. `week_start` defaults to today (UTC).
pub async fn weekly_stats(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<WeeklyStatsQuery>,
) -> Result<Json<WeeklyStats>, AppError> {
    let week_start = query
        .week_start
        .unwrap_or_else(|| Utc::now().date_naive().to_string());

    let stats = db_stats::weekly_stats(&state.pool, user.id, &week_start).await?;
    Ok(Json(stats))
}
