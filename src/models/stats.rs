use serde::{Deserialize, Serialize};

/// Weekly aggregate over the caller's study sessions.
#[derive(Debug, Serialize)]
pub struct WeeklyStats {
    /// Total studied hours in the window, rounded to 2 decimals.
    pub total_hours: f64,
    /// Per-subject minute totals, descending.
    pub by_subject: Vec<SubjectTotal>,
    /// Per-day minute totals and session counts, ascending by date.
    pub daily: Vec<DailyTotal>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct SubjectTotal {
    pub name: String,
    pub color: String,
    pub total_minutes: i64,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct DailyTotal {
    pub date: String,
    pub total_minutes: i64,
    pub session_count: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct WeeklyStatsQuery {
    /// First day of the 7-day window; defaults to today (UTC).
    pub week_start: Option<String>,
}
