// src/error.rs

//! Unified error handling for the resolver application.

use std::fmt;

use thiserror::Error;

/// Result type alias for resolver operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// A source could not be fetched (network failure or non-success status)
    #[error("Source unavailable: {0}")]
    SourceUnavailable(#[from] reqwest::Error),

    /// A scrape or search matched nothing
    #[error("Empty result from {context}")]
    EmptyResult { context: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Identifier regex compilation failed
    #[error("Invalid pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create an empty-result error for the given source context.
    pub fn empty_result(context: impl Into<String>) -> Self {
        Self::EmptyResult {
            context: context.into(),
        }
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create an identifier pattern error.
    pub fn pattern(pattern: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error means a source yielded zero usable items.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_message() {
        let err = AppError::empty_result("song catalog");
        assert_eq!(err.to_string(), "Empty result from song catalog");
        assert!(err.is_empty_result());
    }

    #[test]
    fn test_selector_error_message() {
        let err = AppError::selector("[[bad", "unexpected token");
        assert!(err.to_string().contains("[[bad"));
        assert!(!err.is_empty_result());
    }
}
