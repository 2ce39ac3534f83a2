//! HTTP surface: one module per resource, tied together by [`router`].

pub mod admin;
pub mod auth;
pub mod health;
pub mod notes;
pub mod schedule;
pub mod stats;
pub mod study_sessions;
pub mod subjects;
pub mod timer;

use axum::{
    routing::{get, post, put},
    Router,
};
use sqlx::SqlitePool;

/// Shared state injected into every handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub session_ttl_days: i64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/current-user", get(auth::current_user))
        .route(
            "/api/subjects",
            get(subjects::list_subjects).post(subjects::create_subject),
        )
        .route(
            "/api/study-sessions",
            get(study_sessions::list_study_sessions).post(study_sessions::create_study_session),
        )
        .route(
            "/api/schedule",
            get(schedule::list_schedule).post(schedule::create_schedule_item),
        )
        .route("/api/schedule/{id}", put(schedule::update_schedule_status))
        .route("/api/notes", get(notes::list_notes).post(notes::create_note))
        .route("/api/stats/weekly", get(stats::weekly_stats))
        .route("/api/timer/pomodoro", post(timer::save_pomodoro))
        .route(
            "/api/admin/users",
            get(admin::list_users).post(admin::create_user),
        )
        .route(
            "/api/admin/users/{id}",
            put(admin::update_user).delete(admin::delete_user),
        )
        .route("/api/health", get(health::health_check))
        .with_state(state)
}
