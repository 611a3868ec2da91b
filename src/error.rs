//! Error types for gamedex.

use thiserror::Error;

/// Convenience result alias used across the crate.
pub type Result<T> = std::result::Result<T, GamedexError>;

/// Errors produced while loading records or configuring a catalog.
///
/// Query operations themselves are infallible: they return best-effort
/// derived values (empty sequences, zero averages) instead of errors.
#[derive(Debug, Error)]
pub enum GamedexError {
    /// Reading a data file from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data file or configuration string was not valid JSON for the
    /// expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Catch-all for errors that have no dedicated variant.
    #[error("{0}")]
    Other(String),
}
