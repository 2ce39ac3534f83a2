use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::{
    db::{study_sessions as db_study_sessions, subjects as db_subjects},
    error::AppError,
    middleware::auth::AuthUser,
    models::study_session::PomodoroRequest,
    routes::AppState,
};

const DEFAULT_POMODORO_MINUTES: i64 = 25;

/// `POST /api/timer/pomodoro` — records a finished Pomodoro as a study
/// session dated today, with auto-generated notes.
pub async fn save_pomodoro(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<PomodoroRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let subject_id = req
        .subject_id
        .ok_or_else(|| AppError::missing_field("subject_id"))?;
    let duration_minutes = req.duration_minutes.unwrap_or(DEFAULT_POMODORO_MINUTES);

    if duration_minutes <= 0 {
        return Err(AppError::Validation(
            "duration_minutes must be positive".to_string(),
        ));
    }

    db_subjects::find_owned(&state.pool, subject_id, user.id)
        .await?
        .ok_or_else(|| AppError::Validation("subject_id is invalid".to_string()))?;

    let date = Utc::now().date_naive().to_string();
    let notes = format!("Pomodoro session - {duration_minutes} minutes");

    let id = db_study_sessions::create_study_session(
        &state.pool,
        user.id,
        subject_id,
        duration_minutes,
        &date,
        req.start_time.as_deref(),
        req.end_time.as_deref(),
        Some(&notes),
        "pomodoro",
    )
    .await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}
