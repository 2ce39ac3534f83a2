use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    db::{schedule as db_schedule, subjects as db_subjects},
    error::AppError,
    middleware::auth::AuthUser,
    models::schedule::{
        CreateScheduleRequest, ScheduleFilter, ScheduleItem, UpdateScheduleRequest,
    },
    routes::AppState,
};

/// `GET /api/schedule` — the caller's planned blocks in agenda order,
/// optionally narrowed to one `date` or a `week_start` window.
pub async fn list_schedule(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(filter): Query<ScheduleFilter>,
) -> Result<Json<Vec<ScheduleItem>>, AppError> {
    let items = db_schedule::list_for_user(&state.pool, user.id, &filter).await?;
    Ok(Json(items))
}

/// `POST /api/schedule` — plans a study block. Past dates are accepted; the
/// agenda is a record, not a validator.
pub async fn create_schedule_item(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let subject_id = req
        .subject_id
        .ok_or_else(|| AppError::missing_field("subject_id"))?;
    let title = req.title.ok_or_else(|| AppError::missing_field("title"))?;
    let date = req.date.ok_or_else(|| AppError::missing_field("date"))?;
    let time = req.time.ok_or_else(|| AppError::missing_field("time"))?;
    let duration_minutes = req
        .duration_minutes
        .ok_or_else(|| AppError::missing_field("duration_minutes"))?;

    db_subjects::find_owned(&state.pool, subject_id, user.id)
        .await?
        .ok_or_else(|| AppError::Validation("subject_id is invalid".to_string()))?;

    let id = db_schedule::create_schedule_item(
        &state.pool,
        user.id,
        subject_id,
        &title,
        &date,
        &time,
        duration_minutes,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// `PUT /api/schedule/{id}` — sets the completion flag on one of the
/// caller's items. Items owned by other users answer 404.
pub async fn update_schedule_status(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateScheduleRequest>,
) -> Result<Json<Value>, AppError> {
    let completed = req
        .completed
        .ok_or_else(|| AppError::missing_field("completed"))?;

    let updated = db_schedule::set_completed(&state.pool, id, user.id, completed).await?;
    if !updated {
        return Err(AppError::NotFound);
    }

    Ok(Json(json!({ "message": "Schedule item updated" })))
}
