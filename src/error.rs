//! Error types for the cache facade
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache facade.
///
/// A missing key is never an error: retrieval operations return `Ok(None)`
/// so that "key never stored" stays distinguishable from any stored value.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The underlying store cannot be reached or timed out
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// A dynamic value outside the four accepted scalar kinds
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// A decode function could not interpret the raw stored bytes
    #[error("Decode error: {0}")]
    Decode(String),
}

// == Conversions ==
impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        CacheError::StoreUnavailable(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache facade.
pub type Result<T> = std::result::Result<T, CacheError>;
