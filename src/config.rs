//! Environment-driven configuration.
//!
//! Every setting has a default so the server boots with no `.env` at all.
//! The seed account credentials exist only for first boot on an empty
//! database; override them in any real deployment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string (e.g. "sqlite:studyflow.db?mode=rwc").
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Lifetime of an auth session, in days.
    pub session_ttl_days: i64,
    /// Admin account created on first boot with an empty users table.
    pub seed_admin_username: String,
    pub seed_admin_password: String,
    pub seed_admin_full_name: String,
    /// Also create the two demo accounts on first boot.
    pub seed_demo_users: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:studyflow.db?mode=rwc".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            session_ttl_days: env::var("SESSION_TTL_DAYS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .unwrap_or(7),
            seed_admin_username: env::var("SEED_ADMIN_USERNAME")
                .unwrap_or_else(|_| "admin".to_string()),
            seed_admin_password: env::var("SEED_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "admin123".to_string()),
            seed_admin_full_name: env::var("SEED_ADMIN_FULL_NAME")
                .unwrap_or_else(|_| "Administrator".to_string()),
            seed_demo_users: env::var("SEED_DEMO_USERS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
