use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    db::{study_sessions as db_study_sessions, subjects as db_subjects},
    error::AppError,
    middleware::auth::AuthUser,
    models::study_session::{CreateStudySessionRequest, StudySession, StudySessionFilter},
    routes::AppState,
};

/// `GET /api/study-sessions` — the caller's sessions, newest first,
/// optionally filtered by `start_date`, `end_date`, and `subject_id`.
pub async fn list_study_sessions(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(filter): Query<StudySessionFilter>,
) -> Result<Json<Vec<StudySession>>, AppError> {
    let sessions = db_study_sessions::list_for_user(&state.pool, user.id, &filter).await?;
    Ok(Json(sessions))
}

/// `POST /api/study-sessions` — records a completed study session. The
/// referenced subject must belong to the caller.
pub async fn create_study_session(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateStudySessionRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let subject_id = req
        .subject_id
        .ok_or_else(|| AppError::missing_field("subject_id"))?;
    let duration_minutes = req
        .duration_minutes
        .ok_or_else(|| AppError::missing_field("duration_minutes"))?;
    let date = req.date.ok_or_else(|| AppError::missing_field("date"))?;

    if duration_minutes <= 0 {
        return Err(AppError::Validation(
            "duration_minutes must be positive".to_string(),
        ));
    }

    db_subjects::find_owned(&state.pool, subject_id, user.id)
        .await?
        .ok_or_else(|| AppError::Validation("subject_id is invalid".to_string()))?;

    let technique = req.technique.as_deref().unwrap_or("pomodoro");
    let id = db_study_sessions::create_study_session(
        &state.pool,
        user.id,
        subject_id,
        duration_minutes,
        &date,
        req.start_time.as_deref(),
        req.end_time.as_deref(),
        req.notes.as_deref(),
        technique,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}
