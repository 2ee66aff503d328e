//! Error types for roster-db
//!
//! Every error is recoverable: a rejected write never leaves the store in a
//! partially updated state.

use std::fmt;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Which per-course value a write targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Course grade
    Score,
    /// Attendance percentage
    Attendance,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Score => f.write_str("score"),
            Self::Attendance => f.write_str("attendance"),
        }
    }
}

/// roster-db error types
#[derive(Error, Debug)]
pub enum Error {
    /// Score or attendance value outside [0, 100] (or NaN)
    #[error("{field} for course '{course}' out of range: {value} (expected 0..=100)\nThe previous value was kept")]
    ValueOutOfRange {
        /// Field the write targeted
        field: ValueKind,
        /// Course name
        course: String,
        /// Rejected value
        value: f64,
    },

    /// No student with the given ID
    #[error("Student not found: {0}")]
    StudentNotFound(u32),

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON encode/decode error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
