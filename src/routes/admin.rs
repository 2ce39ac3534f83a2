//! Admin-only user management. Every handler takes the `AdminUser` guard:
//! no session answers 401, a non-admin session answers 403.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::{
    db::users as db_users,
    error::AppError,
    middleware::auth::AdminUser,
    models::user::{CreateUserRequest, UpdateUserRequest, UserSummary},
    routes::AppState,
    services::password::hash_password,
};

const VALID_ROLES: [&str; 2] = ["user", "admin"];

/// `GET /api/admin/users` — all users newest first, without password hashes.
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    let users = db_users::list_users(&state.pool).await?;
    Ok(Json(users))
}

/// `POST /api/admin/users` — creates an account. Role defaults to "user".
pub async fn create_user(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let username = req
        .username
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::missing_field("username"))?;
    let password = req
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::missing_field("password"))?;
    let full_name = req
        .full_name
        .filter(|f| !f.is_empty())
        .ok_or_else(|| AppError::missing_field("full_name"))?;
    let role = req.role.unwrap_or_else(|| "user".to_string());

    if !VALID_ROLES.contains(&role.as_str()) {
        return Err(AppError::Validation(
            "Role must be user or admin".to_string(),
        ));
    }

    if db_users::username_taken(&state.pool, &username, None).await? {
        return Err(AppError::Validation(
            "Username already exists".to_string(),
        ));
    }

    let password_hash = hash_password(&password)?;
    let id = db_users::create_user(&state.pool, &username, &password_hash, &full_name, &role)
        .await?;

    tracing::info!("Admin created user '{}' (role {})", username, role);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": id,
            "username": username,
            "full_name": full_name,
            "role": role,
        })),
    ))
}

/// `PUT /api/admin/users/{id}` — updates profile and role; the password is
/// replaced only when one is supplied.
pub async fn update_user(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<Value>, AppError> {
    let username = req
        .username
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::missing_field("username"))?;
    let full_name = req
        .full_name
        .filter(|f| !f.is_empty())
        .ok_or_else(|| AppError::missing_field("full_name"))?;
    let role = req
        .role
        .filter(|r| !r.is_empty())
        .ok_or_else(|| AppError::missing_field("role"))?;

    if !VALID_ROLES.contains(&role.as_str()) {
        return Err(AppError::Validation(
            "Role must be user or admin".to_string(),
        ));
    }

    if db_users::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound);
    }

    if db_users::username_taken(&state.pool, &username, Some(id)).await? {
        return Err(AppError::Validation(
            "Username already exists".to_string(),
        ));
    }

    let password_hash = match req.password.filter(|p| !p.is_empty()) {
        Some(password) => Some(hash_password(&password)?),
        None => None,
    };

    db_users::update_user(
        &state.pool,
        id,
        &username,
        &full_name,
        &role,
        password_hash.as_deref(),
    )
    .await?;

    Ok(Json(json!({
        "id": id,
        "username": username,
        "full_name": full_name,
        "role": role,
    })))
}

/// `DELETE /api/admin/users/{id}` — removes a user and, atomically, every
/// row that depends on them. Admins cannot delete their own account.
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    if id == admin.id {
        return Err(AppError::Validation(
            "Cannot delete your own account".to_string(),
        ));
    }

    if db_users::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound);
    }

    db_users::delete_user_cascade(&state.pool, id).await?;
    tracing::info!("Admin '{}' deleted user {}", admin.username, id);

    Ok(Json(json!({ "message": "User deleted" })))
}
