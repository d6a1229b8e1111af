//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A single entry's net growth is larger than the whole cache.
    ///
    /// Raised by `put` before any mutation, so the cache is left unchanged.
    #[error("{attempted} exceeds limit of {capacity}.")]
    SizeLimitExceeded {
        /// Net weight the rejected put tried to add
        attempted: usize,
        /// Fixed capacity of the cache
        capacity: usize,
    },
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
