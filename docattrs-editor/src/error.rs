//! Error types for the draft editor

use thiserror::Error;

use crate::validation::DraftValidation;

/// Result type for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Errors that can occur while editing or submitting a draft
#[derive(Debug, Error)]
pub enum EditorError {
    /// Option index outside the current options list
    #[error("option index {index} out of range (len {len})")]
    OptionIndexOutOfRange { index: usize, len: usize },

    /// Draft failed validation and cannot be finalized
    #[error("draft failed validation")]
    InvalidDraft(DraftValidation),

    /// A submission for this session is still pending
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// The persistence collaborator failed or rejected the submission
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Failure reported by the persistence collaborator on submit.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The request never reached a server verdict
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The server refused the attribute
    #[error("server rejected field '{field}': {message}")]
    Rejected { field: String, message: String },
}

impl PersistenceError {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a server-rejection error
    pub fn rejected(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EditorError::OptionIndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "option index 4 out of range (len 2)");
    }

    #[test]
    fn persistence_error_passes_through_unchanged() {
        let err = EditorError::from(PersistenceError::rejected("name", "already taken"));
        assert_eq!(err.to_string(), "server rejected field 'name': already taken");
    }

    #[test]
    fn transport_error_display() {
        let err = PersistenceError::transport("connection reset");
        assert!(err.to_string().contains("connection reset"));
    }
}
