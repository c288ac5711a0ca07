//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `QsError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The base error type shared by all `qs-*` crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QsError {
    /// `pop_min` was called on an empty event scheduler.  The engine loop
    /// always checks `is_empty()` first, so seeing this is a logic bug.
    #[error("event scheduler is empty")]
    EmptyQueue,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Shorthand result type for all `qs-*` crates.
pub type QsResult<T> = Result<T, QsError>;
