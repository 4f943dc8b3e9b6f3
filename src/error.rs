//! Error types for the smps sizing toolkit.
//!
//! The formula layer never fails: degenerate inputs produce IEEE-754
//! infinities or NaN and are passed through untouched. Errors only arise at
//! the text interfaces around it, chiefly CLI argument parsing.

use thiserror::Error;

/// Result type alias using [`SmpsError`].
pub type Result<T> = std::result::Result<T, SmpsError>;

/// Unified error type for all fallible smps operations.
#[derive(Error, Debug)]
pub enum SmpsError {
    /// A value string that is neither plain notation nor a number with an
    /// SI suffix.
    #[error("invalid value '{text}': expected a number, optionally with an SI suffix (p, n, u, m, k, M, G)")]
    InvalidValue { text: String },
}

impl SmpsError {
    /// Create an invalid-value error.
    pub fn invalid_value(text: impl Into<String>) -> Self {
        Self::InvalidValue { text: text.into() }
    }
}
