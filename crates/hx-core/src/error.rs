//! # Error Types
//!
//! Shared error type for the hackathon stack. Crates with their own failure
//! modes (schedule validation, catalog loading, HTTP) define narrower enums
//! and convert into or alongside this one.

use thiserror::Error;

/// Top-level error type for the hackathon stack.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HxError {
    /// A timestamp string or epoch value could not be interpreted.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
