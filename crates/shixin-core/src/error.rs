//! Core error types for shixin-core.
//!
//! This module defines the error hierarchy using thiserror. The advice
//! resolver never surfaces its errors to callers -- they are logged and
//! converted into bundled fallback content -- but collector and
//! configuration errors are real contract violations and propagate.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for shixin-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Quiz collector errors
    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    /// Advice resolution errors
    #[error("Advice error: {0}")]
    Advice(#[from] AdviceError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the answer collector.
///
/// Every variant is a caller defect: the collector only accepts answers
/// for the current question of a live session, and scores are validated
/// at the integer boundary before they reach it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// Answer targets a question other than the current one
    #[error("Answer out of sequence: expected question {expected}, got {got}")]
    OutOfSequence { expected: u32, got: u32 },

    /// Session is already frozen
    #[error("Quiz session already complete: {0}")]
    AlreadyComplete(String),

    /// Current index points outside the question bank
    #[error("Invalid question index: {0}")]
    InvalidIndex(usize),

    /// Raw score outside the 1-5 scale
    #[error("Score must be between 1 and 5, got {0}")]
    InvalidScore(u8),
}

/// Errors from the remote advice path.
///
/// Contained entirely inside the resolver: logged, then replaced by
/// fallback content. They never reach the presentation layer.
#[derive(Error, Debug)]
pub enum AdviceError {
    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the advice API
    #[error("Advice API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Response envelope carried no text
    #[error("Empty response from advice API")]
    EmptyResponse,

    /// Structured payload could not be parsed
    #[error("Failed to parse advice payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The call lost the race against the deadline
    #[error("Advice request timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {}: {message}", path.display())]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {}: {message}", path.display())]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_errors_convert_into_the_umbrella() {
        let err: CoreError = QuizError::InvalidScore(9).into();
        assert_eq!(err.to_string(), "Quiz error: Score must be between 1 and 5, got 9");

        let err: CoreError = ConfigError::UnknownKey("advice.volume".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Unknown configuration key: advice.volume"
        );
    }

    #[test]
    fn out_of_sequence_names_both_questions() {
        let err = QuizError::OutOfSequence { expected: 3, got: 7 };
        assert_eq!(
            err.to_string(),
            "Answer out of sequence: expected question 3, got 7"
        );
    }

    #[test]
    fn timeout_reports_the_bound() {
        let err = AdviceError::Timeout { timeout_secs: 15 };
        assert_eq!(err.to_string(), "Advice request timed out after 15 seconds");
    }
}
