//! Error types for the ECG upload flow.
//!
//! Every variant is recovered locally by [`crate::UploadForm`]: nothing here
//! is fatal, each one ends up as the message of a `Failed` state.
//!
//! The `Display` output of each variant is the text shown to the user.

use thiserror::Error;

/// Message shown when the chosen file is neither `text/csv` nor `*.csv`.
pub const INVALID_FILE_TYPE_MESSAGE: &str = "Invalid file type. Please upload a .csv file.";

/// Fallback when nothing more specific is known about a failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred during analysis.";

// =============================================================================
// Analysis Errors
// =============================================================================

/// Why a file selection or an analysis did not produce a prediction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Client-side validation rejected the file.
    #[error("{}", INVALID_FILE_TYPE_MESSAGE)]
    InvalidFileType,

    /// No prediction service base URL was configured.
    #[error("Prediction service is not configured. Set HEARTCARE_API_URL to the service base URL.")]
    NotConfigured,

    /// Analysis was triggered without a selected file.
    #[error("Please select a CSV file first.")]
    NoFileSelected,

    /// The request never produced a response (network error, CORS, ...).
    #[error("{0}")]
    Transport(String),

    /// The service answered with a non-success status.
    ///
    /// `message` is already the most specific text available and is shown
    /// verbatim.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The service answered with success but the body was not a prediction.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl AnalysisError {
    /// Build a transport failure, falling back to a generic message when the
    /// underlying error has none.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            AnalysisError::Transport(GENERIC_FAILURE_MESSAGE.to_string())
        } else {
            AnalysisError::Transport(message)
        }
    }

    /// Whether re-triggering the same analysis could succeed.
    ///
    /// Validation and configuration problems need user action first.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AnalysisError::Transport(_) | AnalysisError::Server { .. } | AnalysisError::Parse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_file_type_message_is_exact() {
        assert_eq!(
            AnalysisError::InvalidFileType.to_string(),
            "Invalid file type. Please upload a .csv file."
        );
    }

    #[test]
    fn test_server_message_shown_verbatim() {
        let err = AnalysisError::Server {
            status: 400,
            message: "file too short".into(),
        };
        assert_eq!(err.to_string(), "file too short");
    }

    #[test]
    fn test_not_configured_mentions_configuration() {
        let msg = AnalysisError::NotConfigured.to_string();
        assert!(msg.contains("not configured"));
    }

    #[test]
    fn test_empty_transport_message_falls_back() {
        let err = AnalysisError::transport("  ");
        assert_eq!(err.to_string(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_retryable() {
        assert!(AnalysisError::transport("connection refused").is_retryable());
        assert!(!AnalysisError::InvalidFileType.is_retryable());
        assert!(!AnalysisError::NotConfigured.is_retryable());
    }
}
