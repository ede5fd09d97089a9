use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Insufficient stock: {available} available")]
    InsufficientStock { available: i32 },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl RepositoryError {
    /// Map a pool acquire/connect failure. Listing reads degrade on this
    /// variant instead of surfacing a raw driver error.
    pub fn from_acquire(err: SqlxError) -> Self {
        match err {
            SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_) => {
                RepositoryError::Unavailable(err.to_string())
            }
            other => RepositoryError::Sqlx(other),
        }
    }

    /// Map an error raised inside a transaction. Serialization failures and
    /// deadlocks (SQLSTATE 40001 / 40P01) become `Conflict` so the caller
    /// can retry the whole read-modify-write cycle.
    pub fn from_transaction(err: SqlxError) -> Self {
        if let SqlxError::Database(db_err) = &err {
            if matches!(db_err.code().as_deref(), Some("40001") | Some("40P01")) {
                return RepositoryError::Conflict(db_err.message().to_string());
            }
        }
        RepositoryError::Sqlx(err)
    }
}
