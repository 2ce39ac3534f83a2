use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    db::{notes as db_notes, subjects as db_subjects},
    error::AppError,
    middleware::auth::AuthUser,
    models::note::{CreateNoteRequest, Note, NoteFilter},
    routes::AppState,
};

/// `GET /api/notes` — the caller's notes, most recently updated first,
/// optionally filtered by `subject_id`.
pub async fn list_notes(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(filter): Query<NoteFilter>,
) -> Result<Json<Vec<Note>>, AppError> {
    let notes = db_notes::list_for_user(&state.pool, user.id, filter.subject_id).await?;
    Ok(Json(notes))
}

/// `POST /api/notes` — creates a note attached to one of the caller's
/// subjects.
pub async fn create_note(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let subject_id = req
        .subject_id
        .ok_or_else(|| AppError::missing_field("subject_id"))?;
    let title = req.title.ok_or_else(|| AppError::missing_field("title"))?;
    let content = req
        .content
        .ok_or_else(|| AppError::missing_field("content"))?;

    db_subjects::find_owned(&state.pool, subject_id, user.id)
        .await?
        .ok_or_else(|| AppError::Validation("subject_id is invalid".to_string()))?;

    let id = db_notes::create_note(&state.pool, user.id, subject_id, &title, &content).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}
