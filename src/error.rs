//! Error types for complaint-desk
//!
//! A single error enum covers the whole crate. Service operations never
//! swallow failures: they log with operation context and re-raise, leaving
//! recovery to the caller.

use crate::core::{CommentId, TicketId, UserId};
use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, ComplaintDeskError>;

/// All errors that can occur in complaint-desk
#[derive(Debug, Error)]
pub enum ComplaintDeskError {
    /// Ticket id does not resolve to a stored ticket
    #[error("Ticket not found: #{id}")]
    TicketNotFound { id: TicketId },

    /// Comment id does not resolve to a stored comment
    #[error("Comment not found: #{id}")]
    CommentNotFound { id: CommentId },

    /// User id does not resolve against the user directory
    #[error("User not found: {id}")]
    UserNotFound { id: UserId },

    /// A field constraint was violated
    #[error("Validation failed for {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// The storage root has not been initialized
    #[error("Storage not initialized. Run 'complaint-desk init' first")]
    StorageNotInitialized,

    /// Underlying I/O failure from storage or the attachment store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored record could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Caller-supplied input could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Catch-all for context-specific failures
    #[error("{0}")]
    Custom(String),
}

impl ComplaintDeskError {
    /// Create a validation error for a named field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Whether this error is one of the not-found kinds
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TicketNotFound { .. } | Self::CommentNotFound { .. } | Self::UserNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = ComplaintDeskError::TicketNotFound { id: TicketId::new(42) };
        assert!(err.is_not_found());

        let err = ComplaintDeskError::validation("title", "too short");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = ComplaintDeskError::TicketNotFound { id: TicketId::new(7) };
        assert_eq!(err.to_string(), "Ticket not found: #7");

        let err = ComplaintDeskError::validation("title", "must be between 5 and 200 characters");
        assert_eq!(
            err.to_string(),
            "Validation failed for title: must be between 5 and 200 characters"
        );
    }
}
