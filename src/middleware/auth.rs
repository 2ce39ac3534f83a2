//! Session-cookie authentication.
//!
//! Login hands the client an opaque random token in an HttpOnly cookie; the
//! server keeps only the token's SHA-256 in the `sessions` table. Guarded
//! handlers take one of the extractors below as an argument:
//!
//! - [`AuthUser`]: any valid session, else 401.
//! - [`AdminUser`]: valid session with the admin role, else 401/403.
//! - [`MaybeUser`]: never rejects for auth reasons; yields `None` instead.

use std::fmt::Write as _;

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts, HeaderMap},
};
use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::db::sessions as db_sessions;
use crate::error::AppError;
use crate::models::user::SessionUser;
use crate::routes::AppState;

pub const SESSION_COOKIE: &str = "studyflow_session";

/// 32 CSPRNG bytes, hex-encoded. The client-facing session token.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().fold(String::with_capacity(64), |mut s, b| {
        let _ = write!(s, "{b:02x}");
        s
    })
}

/// SHA-256 hex digest of a token. Only this digest is stored server-side.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn session_cookie(token: &str, ttl_days: i64) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        ttl_days * 86_400
    )
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Pulls the session token out of the request's Cookie headers, if any.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            pair.trim()
                .strip_prefix(SESSION_COOKIE)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .map(str::to_string)
}

async fn lookup_session(
    parts: &Parts,
    state: &AppState,
) -> Result<Option<SessionUser>, AppError> {
    let Some(token) = token_from_headers(&parts.headers) else {
        return Ok(None);
    };
    db_sessions::find_session_user(&state.pool, &hash_token(&token)).await
}

/// Any authenticated caller.
#[derive(Debug, Clone)]
pub struct AuthUser(pub SessionUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        lookup_session(parts, state)
            .await?
            .map(AuthUser)
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}

/// Authenticated caller with the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub SessionUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = lookup_session(parts, state)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;

        if user.role != "admin" {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(AdminUser(user))
    }
}

/// The caller's identity when present. Missing, invalid, and expired
/// sessions all yield `None` rather than a rejection.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<SessionUser>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(lookup_session(parts, state).await?))
    }
}
