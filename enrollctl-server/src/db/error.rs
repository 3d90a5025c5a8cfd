//! Storage error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    /// A write referenced a missing row, or a delete left dangling references.
    #[error("foreign key violation on {constraint}")]
    ForeignKeyViolation { constraint: String },
}

impl DbError {
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, Self::ForeignKeyViolation { .. })
    }
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_foreign_key_violation() {
                return Self::ForeignKeyViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_owned(),
                };
            }
        }
        Self::Sqlx(e)
    }
}
