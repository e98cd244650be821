//! rollcall-server: HTTP service for students, classes and enrollments
//!
//! Layers, leaves first:
//! - [`db`]: SQLite pool, migrations and repositories
//! - [`models`]: request/response shapes and validation errors
//! - [`http`]: axum router, extractors, handlers and error mapping

pub mod db;
pub mod http;
pub mod models;

pub use db::pool::DEFAULT_DATABASE_URL;
pub use db::{create_pool, create_pool_with_options, DbError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
