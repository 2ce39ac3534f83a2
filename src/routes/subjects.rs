use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::{
    db::subjects as db_subjects,
    error::AppError,
    middleware::auth::AuthUser,
    models::subject::{CreateSubjectRequest, Subject},
    routes::AppState,
};

const DEFAULT_COLOR: &str = "#4A90E2";

/// `GET /api/subjects` — the caller's subjects, ordered by name.
pub async fn list_subjects(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = db_subjects::list_for_user(&state.pool, user.id).await?;
    Ok(Json(subjects))
}

/// `POST /api/subjects` — creates a subject owned by the caller.
pub async fn create_subject(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateSubjectRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let name = req
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::missing_field("name"))?;
    let color = req.color.unwrap_or_else(|| DEFAULT_COLOR.to_string());

    let id = db_subjects::create_subject(&state.pool, user.id, &name, &color).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "name": name, "color": color })),
    ))
}
