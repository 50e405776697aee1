use std::sync::Arc;
use thiserror::Error;
use crate::cache::errors::CacheError;
use crate::query::errors::QueryError;

/// Cloned to every caller that shared a coalesced lookup.
#[derive(Error, Debug, Clone)]
pub enum DataAccessError {
    #[error("record not found")]
    RecordNotFound,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cache unavailable: {0}")]
    Cache(Arc<CacheError>),

    #[error("store error: {0}")]
    Store(Arc<sqlx::Error>),

    #[error("request cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,

    #[error("coalesced lookup failed: {0}")]
    Flight(String),
}

impl DataAccessError {
    /// True for the only outcome callers should report as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataAccessError::RecordNotFound)
    }

    pub fn is_cache_error(&self) -> bool {
        matches!(self, DataAccessError::Cache(_))
    }

    pub fn is_store_error(&self) -> bool {
        matches!(self, DataAccessError::Store(_))
    }
}

impl From<CacheError> for DataAccessError {
    fn from(error: CacheError) -> Self {
        DataAccessError::Cache(Arc::new(error))
    }
}

impl From<sqlx::Error> for DataAccessError {
    fn from(error: sqlx::Error) -> Self {
        DataAccessError::Store(Arc::new(error))
    }
}

impl From<QueryError> for DataAccessError {
    fn from(error: QueryError) -> Self {
        DataAccessError::InvalidArgument(error.to_string())
    }
}
