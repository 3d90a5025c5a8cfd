//! Unit-of-work seam between handlers and storage
//!
//! A handler opens one [`UnitOfWork`] per request with [`Store::begin`],
//! runs its repository calls against it, and hands it to [`finish`] which
//! commits on success and rolls back on failure. Nothing outlives the request.

use async_trait::async_trait;

use super::repos::{CourseRepo, EnrollmentRepo, StudentRepo};
use super::DbError;

/// A single transaction over all three tables.
///
/// Dropping a unit of work without calling `commit` rolls it back.
#[async_trait]
pub trait UnitOfWork: StudentRepo + CourseRepo + EnrollmentRepo + Send {
    async fn commit(self: Box<Self>) -> Result<(), DbError>;
    async fn rollback(self: Box<Self>) -> Result<(), DbError>;
}

/// Source of units of work (testable)
#[async_trait]
pub trait Store: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DbError>;
}

/// Close a unit of work according to `result`.
///
/// `Ok` commits, and a failed commit becomes the returned error. `Err`
/// rolls back; a rollback failure is logged and the handler's error wins.
pub async fn finish<T, E>(uow: Box<dyn UnitOfWork>, result: Result<T, E>) -> Result<T, E>
where
    E: From<DbError>,
{
    match result {
        Ok(value) => {
            uow.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = uow.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}
