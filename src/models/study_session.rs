use serde::{Deserialize, Serialize};

/// Study session row joined to its subject's name and color.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct StudySession {
    pub id: i64,
    pub user_id: i64,
    pub subject_id: i64,
    pub duration_minutes: i64,
    pub date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub notes: Option<String>,
    pub technique: String,
    pub created_at: String,
    pub subject_name: Option<String>,
    pub subject_color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateStudySessionRequest {
    pub subject_id: Option<i64>,
    pub duration_minutes: Option<i64>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub notes: Option<String>,
    pub technique: Option<String>,
}

/// Optional filters for `GET /api/study-sessions`.
#[derive(Debug, Default, Deserialize)]
pub struct StudySessionFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub subject_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct PomodoroRequest {
    pub subject_id: Option<i64>,
    pub duration_minutes: Option<i64>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
