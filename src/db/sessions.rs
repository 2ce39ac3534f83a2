//! Auth session store. Sessions are keyed by the SHA-256 of the opaque
//! cookie token; the token itself is never persisted.

use chrono::{NaiveDateTime, Utc};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::user::SessionUser;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: i64,
    username: String,
    full_name: String,
    role: String,
    expires_at: String,
}

pub async fn create_session(
    pool: &SqlitePool,
    token_hash: &str,
    user_id: i64,
    ttl_days: i64,
) -> Result<(), AppError> {
    let expires_at = (Utc::now() + chrono::Duration::days(ttl_days))
        .format(TIMESTAMP_FORMAT)
        .to_string();

    sqlx::query(
        r#"
        INSERT INTO sessions (token_hash, user_id, expires_at)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(token_hash)
    .bind(user_id)
    .bind(&expires_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Resolves a token hash to the session's user. Expired sessions are
/// deleted on sight and resolve to `None`.
pub async fn find_session_user(
    pool: &SqlitePool,
    token_hash: &str,
) -> Result<Option<SessionUser>, AppError> {
    let row = sqlx::query_as::<_, SessionRow>(
        r#"
        SELECT u.id, u.username, u.full_name, u.role, s.expires_at
        FROM sessions s
        JOIN users u ON u.id = s.user_id
        WHERE s.token_hash = ?
        "#,
    )
    .bind(token_hash)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let expires = NaiveDateTime::parse_from_str(&row.expires_at, TIMESTAMP_FORMAT)
        .map_err(|e| AppError::Internal(format!("Session expiry parse error: {e}")))?;
    if expires.and_utc() < Utc::now() {
        delete_session(pool, token_hash).await?;
        return Ok(None);
    }

    Ok(Some(SessionUser {
        id: row.id,
        username: row.username,
        full_name: row.full_name,
        role: row.role,
    }))
}

pub async fn delete_session(pool: &SqlitePool, token_hash: &str) -> Result<(), AppError> {
    sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
        .bind(token_hash)
        .execute(pool)
        .await?;

    Ok(())
}
