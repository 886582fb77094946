//! Error types for the criteria-sql crate.
//!
//! Serialization itself never fails; errors only come from the boundary
//! APIs that parse text.

use thiserror::Error;

/// Errors that can occur when decoding criteria or operator tokens.
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// The input was not valid JSON.
    #[error("invalid criteria JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A token did not name a boolean operator.
    #[error("unknown operator '{0}', expected AND or OR")]
    UnknownOperator(String),
}

/// Result type for criteria-sql operations.
pub type Result<T> = std::result::Result<T, CriteriaError>;
