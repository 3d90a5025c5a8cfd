//! PostgreSQL-backed store
//!
//! Each unit of work is a `sqlx::Transaction` taken from the pool. The
//! repository impls for [`PgUnitOfWork`] live next to their SQL in `repos/`.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use super::store::{Store, UnitOfWork};
use super::DbError;

/// Store handing out pooled PostgreSQL transactions
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Open PostgreSQL transaction
pub struct PgUnitOfWork {
    pub(crate) tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl Store for PgStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, DbError> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgUnitOfWork { tx }))
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn commit(self: Box<Self>) -> Result<(), DbError> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), DbError> {
        self.tx.rollback().await?;
        Ok(())
    }
}
