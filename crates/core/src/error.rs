//! Error types for the BPE training library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the training library.
#[derive(Error, Debug)]
pub enum BpeError {
    /// Corpus file is missing or unreadable
    #[error("Corpus source unavailable at {path}: {err}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Caller-supplied argument violates a precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error saving a trained vocabulary
    #[error("Save error: {0}")]
    Save(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for training operations.
pub type Result<T> = std::result::Result<T, BpeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_message() {
        let err = BpeError::SourceUnavailable {
            path: PathBuf::from("missing.txt"),
            err: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        let message = err.to_string();
        assert!(message.contains("missing.txt"));
        assert!(message.contains("not found"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = BpeError::InvalidArgument("merge budget must be non-negative, got -3".into());
        assert_eq!(
            err.to_string(),
            "Invalid argument: merge budget must be non-negative, got -3"
        );
    }
}
