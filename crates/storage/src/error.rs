//! Typed error enum for the storage layer.
//!
//! Lets callers match on specific failure modes (not found, pool
//! exhaustion, migration failure) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for an expected-present lead.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// SQL execution or row decoding failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Connection pool failure (exhaustion, broken connection).
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Schema migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is a missing-row condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
