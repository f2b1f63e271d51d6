//! Error types for kwexpand.
//!
//! The expansion engine itself never fails: malformed or empty seeds degrade
//! to an empty result. Errors come from the edges around it, namely loading a
//! modifier catalog from disk, validating caller requests and the CLI.
//!
//! # Examples
//!
//! ```
//! use kwexpand::error::{KwexpandError, Result};
//!
//! fn lookup_industry(key: &str) -> Result<()> {
//!     Err(KwexpandError::not_found(format!("industry '{key}'")))
//! }
//!
//! assert!(lookup_industry("astrology").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for kwexpand operations.
#[derive(Error, Debug)]
pub enum KwexpandError {
    /// I/O errors (reading catalogs, batch files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (char filtering, tokenization, token filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Modifier catalog errors (missing or empty term lists)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A requested industry or scope does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with KwexpandError.
pub type Result<T> = std::result::Result<T, KwexpandError>;

impl KwexpandError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        KwexpandError::Analysis(msg.into())
    }

    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        KwexpandError::Catalog(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        KwexpandError::NotFound(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        KwexpandError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KwexpandError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = KwexpandError::catalog("empty intent list");
        assert_eq!(error.to_string(), "Catalog error: empty intent list");

        let error = KwexpandError::not_found("industry 'astrology'");
        assert_eq!(error.to_string(), "Not found: industry 'astrology'");

        let error = KwexpandError::invalid_argument("no seeds");
        assert_eq!(error.to_string(), "Invalid argument: no seeds");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = KwexpandError::from(io_error);

        match error {
            KwexpandError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let error = KwexpandError::from(json_error);
        assert!(matches!(error, KwexpandError::Json(_)));
    }
}
