//! Error types for the HeartCare command-line client.
//!
//! [`AnalysisError`] covers everything the upload form reports; this module
//! only adds what happens around it (reading the input, printing output).

use heartcare_core::AnalysisError;
use thiserror::Error;

/// Errors surfaced by `heartcare` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to read the input file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Selection or analysis failed.
    #[error("{0}")]
    Analysis(#[from] AnalysisError),

    /// Failed to render JSON output.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// What the user can do next, if anything useful can be said.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Analysis(e) if e.is_retryable() => {
                Some("The request failed; run the same command again to retry.")
            }
            CliError::Analysis(AnalysisError::NotConfigured) => {
                Some("Pass --endpoint <URL> or set HEARTCARE_API_URL.")
            }
            CliError::Analysis(_) => Some("Choose a .csv file and try again."),
            _ => None,
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
