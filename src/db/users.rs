use sqlx::SqlitePool;

use crate::config::Config;
use crate::error::AppError;
use crate::models::user::{User, UserSummary};
use crate::services::password::hash_password;

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, full_name, role, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, full_name, role, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// All users newest first, password hashes excluded.
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<UserSummary>, AppError> {
    let users = sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT id, username, full_name, role, created_at
        FROM users
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Is `username` already in use by a user other than `exclude_id`?
pub async fn username_taken(
    pool: &SqlitePool,
    username: &str,
    exclude_id: Option<i64>,
) -> Result<bool, AppError> {
    let existing: Option<i64> = sqlx::query_scalar(
        r#"
        SELECT id FROM users
        WHERE username = ? AND id != ?
        "#,
    )
    .bind(username)
    .bind(exclude_id.unwrap_or(-1))
    .fetch_optional(pool)
    .await?;

    Ok(existing.is_some())
}

pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
    full_name: &str,
    role: &str,
) -> Result<i64, AppError> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (username, password_hash, full_name, role)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(full_name)
    .bind(role)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Updates a user's profile; the password hash is replaced only when given.
pub async fn update_user(
    pool: &SqlitePool,
    id: i64,
    username: &str,
    full_name: &str,
    role: &str,
    password_hash: Option<&str>,
) -> Result<(), AppError> {
    if let Some(hash) = password_hash {
        sqlx::query(
            r#"
            UPDATE users SET username = ?, full_name = ?, role = ?, password_hash = ?
            WHERE id = ?
            "#,
        )
        .bind(username)
        .bind(full_name)
        .bind(role)
        .bind(hash)
        .bind(id)
        .execute(pool)
        .await?;
    } else {
        sqlx::query(
            r#"
            UPDATE users SET username = ?, full_name = ?, role = ?
            WHERE id = ?
            "#,
        )
        .bind(username)
        .bind(full_name)
        .bind(role)
        .bind(id)
        .execute(pool)
        .await?;
    }

    Ok(())
}

/// Deletes a user and every row that depends on them, in one transaction so a
/// partial failure cannot orphan rows. Dependency order: study sessions
/// (owned directly or through an owned subject), schedule items, notes, auth
/// sessions, subjects, then the user row.
pub async fn delete_user_cascade(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        DELETE FROM study_sessions
        WHERE user_id = ?1 OR subject_id IN (SELECT id FROM subjects WHERE user_id = ?1)
        "#,
    )
    .bind(id)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM schedule WHERE user_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM notes WHERE user_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM sessions WHERE user_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM subjects WHERE user_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// First-boot seeding: when the users table is empty, create the admin
/// account (and the demo accounts unless disabled). Credentials come from
/// the environment with fixed fallbacks.
pub async fn seed_default_users(pool: &SqlitePool, config: &Config) -> Result<(), AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let admin_hash = hash_password(&config.seed_admin_password)?;
    create_user(
        pool,
        &config.seed_admin_username,
        &admin_hash,
        &config.seed_admin_full_name,
        "admin",
    )
    .await?;
    tracing::info!("Seeded admin account '{}'", config.seed_admin_username);

    if config.seed_demo_users {
        for (username, password, full_name) in [
            ("lucas.mendes", "lucas123", "Lucas Mendes"),
            ("ana.beatriz", "ana123", "Ana Beatriz"),
        ] {
            let hash = hash_password(password)?;
            create_user(pool, username, &hash, full_name, "user").await?;
        }
        tracing::info!("Seeded demo accounts");
    }

    Ok(())
}
