//! Custom error types for Aeyla
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Invalid settings or command-line values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Every id up to the top of the range has been handed out
    #[error("No student IDs left after {last_id}")]
    IdsExhausted { last_id: u32 },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl RosterError {
    /// Create a "not found" error for students
    pub fn student_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Student",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
