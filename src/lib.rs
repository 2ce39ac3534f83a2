//! StudyFlow: a session-cookie-authenticated study-tracking backend.
//!
//! Library target so integration tests can build the router against an
//! in-memory database; the binary lives in `main.rs`.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
