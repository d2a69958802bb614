//! Error types for the intake crate
//!
//! The wizard engine itself never fails; these errors come from the edges
//! (files, configuration, parsing identifiers, the terminal).

use thiserror::Error;

/// Result type alias for intake operations
pub type Result<T> = std::result::Result<T, IntakeError>;

/// Main error type for all intake operations
#[derive(Debug, Error)]
pub enum IntakeError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Text that does not name a wizard step
    #[error("Unknown step: {0}")]
    UnknownStep(String),

    /// Contact details rejected by validation
    #[error("Invalid contact details: {0}")]
    InvalidContact(String),

    /// The briefing could not be handed off
    #[error("Submission failed: {0}")]
    Submission(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl IntakeError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            IntakeError::FileNotFound(_) => "FILE_NOT_FOUND",
            IntakeError::InvalidJson(_) => "INVALID_JSON",
            IntakeError::ConfigError(_) => "CONFIG_ERROR",
            IntakeError::UnknownStep(_) => "UNKNOWN_STEP",
            IntakeError::InvalidContact(_) => "INVALID_CONTACT",
            IntakeError::Submission(_) => "SUBMISSION",
            IntakeError::Io(_) => "IO_ERROR",
            IntakeError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        IntakeError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &IntakeError) -> i32 {
    match error {
        IntakeError::InvalidContact(_) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(IntakeError::FileNotFound("test".into()).code(), "FILE_NOT_FOUND");
        assert_eq!(IntakeError::InvalidJson("test".into()).code(), "INVALID_JSON");
        assert_eq!(IntakeError::ConfigError("test".into()).code(), "CONFIG_ERROR");
        assert_eq!(IntakeError::UnknownStep("test".into()).code(), "UNKNOWN_STEP");
        assert_eq!(IntakeError::InvalidContact("test".into()).code(), "INVALID_CONTACT");
        assert_eq!(IntakeError::Submission("test".into()).code(), "SUBMISSION");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(to_exit_code(&IntakeError::InvalidContact("x".into())), 2);
        assert_eq!(to_exit_code(&IntakeError::UnknownStep("x".into())), 1);
    }

    #[test]
    fn test_wrap_error() {
        let wrapped = IntakeError::wrap("disk full", "writing briefing");
        assert_eq!(wrapped.code(), "WRAPPED_ERROR");
        assert!(wrapped.to_string().contains("writing briefing"));
        assert!(wrapped.to_string().contains("disk full"));
    }
}
