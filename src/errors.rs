/*!
 * Error types for the textlens application.
 *
 * Provider errors come from the external capabilities (translation and
 * scoring), analysis errors describe why a pipeline step failed, and
 * `AppError` wraps everything for the command line front end.
 */

use std::time::Duration;
use thiserror::Error;

/// Errors raised by a translation or scoring capability
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The scorer could not produce a score for the given text
    #[error("Scoring failed: {0}")]
    ScoringFailed(String),
}

/// Errors produced by a step of the analysis pipeline
#[derive(Error, Debug, Clone)]
pub enum AnalysisError {
    /// The translation capability failed
    #[error("Translation failed: {0}")]
    TranslationFailure(ProviderError),

    /// The translation capability did not answer in time
    #[error("Translation timed out after {timeout:?}")]
    TranslationTimeout {
        /// Timeout that elapsed
        timeout: Duration,
    },

    /// The scoring capability failed
    #[error("Scoring failed: {0}")]
    ScoringFailure(ProviderError),

    /// The input bytes are not valid UTF-8
    #[error("Input is not valid UTF-8 text (invalid byte at offset {valid_up_to})")]
    InputDecodeFailure {
        /// Length of the longest valid prefix
        valid_up_to: usize,
    },
}

impl AnalysisError {
    /// Whether the pipeline may continue with a fallback value after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InputDecodeFailure { .. })
    }
}

/// Failures surfaced by the command line front end
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the analysis pipeline
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
