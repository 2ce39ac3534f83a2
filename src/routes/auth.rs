use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::{
    db::{sessions as db_sessions, users as db_users},
    error::AppError,
    middleware::auth::{
        clear_session_cookie, generate_token, hash_token, session_cookie, token_from_headers,
        MaybeUser,
    },
    models::user::LoginRequest,
    routes::AppState,
    services::password::verify_password,
};

/// `POST /api/login` — verifies credentials and issues a session cookie.
///
/// Unknown usernames and wrong passwords fail identically so the endpoint
/// cannot be used to enumerate accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(username), Some(password)) = (
        req.username.filter(|u| !u.is_empty()),
        req.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(AppError::Validation(
            "username and password are required".to_string(),
        ));
    };

    let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

    let user = db_users::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(&password, &user.password_hash)? {
        return Err(invalid());
    }

    let token = generate_token();
    db_sessions::create_session(
        &state.pool,
        &hash_token(&token),
        user.id,
        state.session_ttl_days,
    )
    .await?;

    tracing::debug!("User '{}' logged in", user.username);

    let body = Json(json!({
        "success": true,
        "user": {
            "id": user.id,
            "username": user.username,
            "full_name": user.full_name,
            "role": user.role,
        }
    }));

    Ok((
        [(SET_COOKIE, session_cookie(&token, state.session_ttl_days))],
        body,
    ))
}

/// `POST /api/logout` — destroys the presented session, if any, and clears
/// the cookie. Safe to call repeatedly.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    if let Some(token) = token_from_headers(&headers) {
        db_sessions::delete_session(&state.pool, &hash_token(&token)).await?;
    }

    Ok((
        [(SET_COOKIE, clear_session_cookie())],
        Json(json!({ "success": true })),
    ))
}

/// `GET /api/current-user` — the session's identity, or `{"user": null}`.
pub async fn current_user(MaybeUser(user): MaybeUser) -> Json<Value> {
    Json(json!({ "user": user }))
}
