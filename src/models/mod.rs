//! Data structures shared between the db and routes layers: row types
//! (`sqlx::FromRow`) plus typed request/response bodies for each endpoint.

pub mod note;
pub mod schedule;
pub mod stats;
pub mod study_session;
pub mod subject;
pub mod user;

pub use note::*;
pub use schedule::*;
pub use stats::*;
pub use study_session::*;
pub use subject::*;
pub use user::*;
