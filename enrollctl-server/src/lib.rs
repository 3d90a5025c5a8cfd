//! enrollctl-server: HTTP API over students, courses and enrollments
//!
//! Layers, leaf to root:
//! - `models`: request payloads validated before any store mutation
//! - `db`: connection pool, schema, and the unit-of-work seam
//! - `http`: axum router, handlers and the error-to-status adapter

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryStore, PgStore, Store, UnitOfWork};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
