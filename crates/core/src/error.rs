//! Error types for Trove
//!
//! This module provides unified error handling across the client,
//! including validation errors, configuration errors, submission errors,
//! and IO/serialization errors.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Trove
#[derive(Debug, Error)]
pub enum TroveError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A single form field failed validation
    #[error("Field '{field}' is invalid: {message}")]
    FieldValidation { field: String, message: String },

    /// A submitted payload was rejected as a whole
    #[error("Submission payload invalid: {0}")]
    PayloadValidation(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Custom field not found in the working set
    #[error("Custom field not found: {0}")]
    FieldNotFound(uuid::Uuid),

    /// Organization context is missing
    #[error("No organization configured")]
    MissingOrganization,

    // ========================================================================
    // Submission Errors
    // ========================================================================
    /// Transport-level submission failure
    #[error("Submission failed: {0}")]
    Submission(String),

    /// Server rejected the submission
    #[error("Server rejected submission with status {status}: {message}")]
    SubmissionRejected { status: u16, message: String },

    /// Submission did not complete in time
    #[error("Submission timed out after {seconds}s")]
    SubmissionTimeout { seconds: u64 },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("Failed to read config '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },

    /// Configuration file could not be written
    #[error("Failed to write config '{path}': {message}")]
    ConfigWrite { path: PathBuf, message: String },

    // ========================================================================
    // IO / Serialization Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl TroveError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        TroveError::Validation(msg.into())
    }

    /// Create a field validation error
    pub fn field_validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        TroveError::FieldValidation {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create a submission error
    pub fn submission(msg: impl Into<String>) -> Self {
        TroveError::Submission(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        TroveError::InvalidConfig(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        TroveError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        TroveError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TroveError::Validation(_)
                | TroveError::FieldValidation { .. }
                | TroveError::PayloadValidation(_)
        )
    }

    /// Check if this error is a submission-transport error
    pub fn is_submission(&self) -> bool {
        matches!(
            self,
            TroveError::Submission(_)
                | TroveError::SubmissionRejected { .. }
                | TroveError::SubmissionTimeout { .. }
        )
    }

    /// Check if this error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            TroveError::InvalidConfig(_)
                | TroveError::ConfigRead { .. }
                | TroveError::ConfigWrite { .. }
        )
    }
}

/// Result type alias using TroveError
pub type TroveResult<T> = Result<T, TroveError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> TroveResult<T>;
}

impl<T, E: Into<TroveError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> TroveResult<T> {
        self.map_err(|e| {
            let err: TroveError = e.into();
            TroveError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_error() {
        let err = TroveError::validation("Name is required");
        assert!(err.is_validation());
        assert!(!err.is_submission());
        assert_eq!(err.to_string(), "Validation error: Name is required");
    }

    #[test]
    fn test_field_validation_error() {
        let err = TroveError::field_validation("name", "Name must be at least 2 characters long");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Field 'name' is invalid: Name must be at least 2 characters long"
        );
    }

    #[test]
    fn test_submission_errors() {
        let err = TroveError::submission("connection refused");
        assert!(err.is_submission());
        assert!(!err.is_validation());

        let err = TroveError::SubmissionRejected {
            status: 422,
            message: "unprocessable".to_string(),
        };
        assert!(err.is_submission());
        assert_eq!(
            err.to_string(),
            "Server rejected submission with status 422: unprocessable"
        );

        let err = TroveError::SubmissionTimeout { seconds: 30 };
        assert!(err.is_submission());
    }

    #[test]
    fn test_config_errors() {
        let err = TroveError::config("api_base_url is empty");
        assert!(err.is_config());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: api_base_url is empty"
        );
    }

    #[test]
    fn test_field_not_found() {
        let id = uuid::Uuid::new_v4();
        let err = TroveError::FieldNotFound(id);
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), format!("Custom field not found: {}", id));
    }

    #[test]
    fn test_error_with_context() {
        let err = TroveError::with_context("Saving config", "Permission denied");
        assert_eq!(err.to_string(), "Saving config: Permission denied");
    }

    #[test]
    fn test_result_ext_adds_context() {
        let io_err: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        let err = io_err.with_context("Loading config").unwrap_err();
        assert!(err.to_string().starts_with("Loading config:"));
    }
}
