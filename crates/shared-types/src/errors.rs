//! # Error Types
//!
//! Defines the error taxonomy shared by the stores and the gateway.
//!
//! `ValidationError` messages describe the rejected field for server-side
//! logs; the gateway never forwards them to clients verbatim.

use thiserror::Error;

/// Malformed or out-of-range user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Pool name is empty.
    #[error("pool name must not be empty")]
    EmptyPoolName,

    /// Pool name exceeds the schema bound.
    #[error("pool name exceeds {max} bytes")]
    PoolNameTooLong { max: usize },

    /// Minimum share size below 1.
    #[error("minimum share size must be at least 1")]
    MinSizeTooSmall,

    /// A numeric field failed to parse as an integer.
    #[error("{field} is not a valid integer")]
    NotANumber { field: &'static str },

    /// A numeric field carried a negative value.
    #[error("{field} must be non-negative")]
    NegativeValue { field: &'static str },

    /// Job title is empty.
    #[error("title must not be empty")]
    EmptyTitle,

    /// Job title exceeds the schema bound.
    #[error("title exceeds {max} bytes")]
    TitleTooLong { max: usize },

    /// An enumerated field carried a value outside its fixed set.
    #[error("unrecognized {field} value")]
    UnknownVariant { field: &'static str },
}

/// Errors surfaced by the pool and entry stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Referenced pool does not exist.
    #[error("pool not found")]
    PoolNotFound,

    /// Rejected input at the storage boundary.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persistence-layer failure. Detail is for server-side logs only.
    #[error("database error: {0}")]
    Database(String),

    /// A store operation exceeded its deadline.
    #[error("store operation timed out")]
    Timeout,
}
