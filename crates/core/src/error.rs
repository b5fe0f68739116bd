//! Error types for FTL document operations.
//!
//! This module defines the main error type [`FtlError`] which represents
//! all possible errors that can occur while loading input, transforming it
//! through the LLM collaborator, validating, and rendering documents.
//!
//! # Example
//!
//! ```rust
//! use ftl_core::{FtlError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.trim().is_empty() {
//!         return Err(FtlError::NotFound("empty input".to_string()));
//!     }
//!     Ok(text)
//! }
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::llm::LlmError;

/// Main error type for FTL document operations.
///
/// Each variant renders with a distinct message prefix so operators can tell
/// configuration problems from content problems from upstream failures.
/// [`FtlError::category`] exposes that grouping directly.
///
/// # Example
///
/// ```rust
/// use ftl_core::{FtlDocument, FtlError, validate_strict};
///
/// let doc = FtlDocument::default();
/// match validate_strict(&doc) {
///     Ok(result) => println!("score {}", result.score),
///     Err(FtlError::Validation { errors }) => println!("{} errors", errors.len()),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum FtlError {
    /// A parsing path with no implementation behind it.
    ///
    /// Binary document formats (DOCX, PDF, ...) end here. The LLM-backed
    /// text path is the only supported route.
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// The document failed its required-section checks.
    #[error("Document validation failed:\n{}", .errors.join("\n"))]
    Validation { errors: Vec<String> },

    /// The LLM collaborator failed. The underlying cause is kept as source.
    #[error("Transformation failed: {0}")]
    Transformation(#[from] LlmError),

    /// A render or save format outside markdown/json/yaml.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// File not found.
    ///
    /// Returned when an input or prompt file doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A remote resource that does not resolve (404/410) or empty input.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request errors from reqwest.
    ///
    /// Wraps network errors, DNS failures and connection issues.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success HTTP status while fetching input.
    #[error("HTTP request failed with status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// File read and write errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON or YAML serialization errors.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Coarse grouping of [`FtlError`] variants for user-facing reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad paths, URLs, formats or unsupported inputs.
    Configuration,
    /// The document itself is incomplete or cannot be serialized.
    Content,
    /// The network or the LLM service failed.
    Upstream,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Configuration => "Configuration error",
            Self::Content => "Content error",
            Self::Upstream => "Upstream error",
        };
        f.write_str(label)
    }
}

impl FtlError {
    /// Returns the reporting category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotImplemented(_)
            | Self::UnsupportedFormat(_)
            | Self::FileNotFound(_)
            | Self::NotFound(_)
            | Self::InvalidUrl(_)
            | Self::Io(_) => ErrorCategory::Configuration,
            Self::Validation { .. } | Self::Serialization(_) => ErrorCategory::Content,
            Self::Transformation(LlmError::MissingApiKey) => ErrorCategory::Configuration,
            Self::Transformation(_) => ErrorCategory::Upstream,
            #[cfg(feature = "fetch")]
            Self::HttpError(_) => ErrorCategory::Upstream,
            Self::HttpStatus { .. } | Self::Timeout { .. } => ErrorCategory::Upstream,
        }
    }
}

impl From<serde_json::Error> for FtlError {
    fn from(err: serde_json::Error) -> Self {
        FtlError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for FtlError {
    fn from(err: serde_yaml::Error) -> Self {
        FtlError::Serialization(err.to_string())
    }
}

/// Result type alias for FtlError.
///
/// This is a convenience alias for `std::result::Result<T, FtlError>`.
pub type Result<T> = std::result::Result<T, FtlError>;
