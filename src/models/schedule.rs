use serde::{Deserialize, Serialize};

/// Schedule row joined to its subject's name and color.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ScheduleItem {
    pub id: i64,
    pub user_id: i64,
    pub subject_id: i64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub duration_minutes: i64,
    pub completed: bool,
    pub created_at: String,
    pub subject_name: Option<String>,
    pub subject_color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateScheduleRequest {
    pub subject_id: Option<i64>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration_minutes: Option<i64>,
}

/// `date` returns one day; `week_start` returns `[week_start, week_start+7d)`.
#[derive(Debug, Default, Deserialize)]
pub struct ScheduleFilter {
    pub date: Option<String>,
    pub week_start: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateScheduleRequest {
    pub completed: Option<bool>,
}
