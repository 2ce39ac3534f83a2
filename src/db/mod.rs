//! Data access layer. Route handlers call these functions; nothing here
//! knows about HTTP.

pub mod notes;
pub mod schedule;
pub mod sessions;
pub mod stats;
pub mod study_sessions;
pub mod subjects;
pub mod users;
