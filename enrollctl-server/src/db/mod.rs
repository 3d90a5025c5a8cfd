//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One unit of work (transaction) per request, never shared across requests
//! - List operations use JOINs - no N+1 queries
//! - Rely on DB constraints for referential integrity - no check-then-insert
//! - Every unit of work ends in commit or rollback, see [`finish`]

pub mod error;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod repos;
pub mod store;

pub use error::DbError;
pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgStore;
pub use repos::*;
pub use store::{finish, Store, UnitOfWork};
