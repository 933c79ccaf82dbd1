//! Error types for api-to-sql
//!
//! Every stage of the pipeline returns `Result<T, Error>` where Error is
//! defined here. Errors are terminal for a run: nothing is retried and no
//! partial output is left behind.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for api-to-sql
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML config: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Fetch Errors
    // ============================================================================
    #[error("Invalid URL '{url}': {source} (expected a full URL such as https://api.example.com/data)")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported URL scheme '{scheme}' (expected a full http or https URL such as https://api.example.com/data)")]
    UnsupportedScheme { scheme: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ============================================================================
    // Parse Errors
    // ============================================================================
    #[error("Response is not valid JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Schema Errors
    // ============================================================================
    #[error("Unsupported JSON shape: {message}")]
    Schema { message: String },

    // ============================================================================
    // Write Errors
    // ============================================================================
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`Error`], one per pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Fetch,
    Parse,
    Schema,
    Write,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Fetch => write!(f, "fetch"),
            ErrorCategory::Parse => write!(f, "parse"),
            ErrorCategory::Schema => write!(f, "schema"),
            ErrorCategory::Write => write!(f, "write"),
        }
    }
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a write error for a specific output path
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Which pipeline stage this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config { .. } | Error::YamlParse(_) => ErrorCategory::Config,
            Error::InvalidUrl { .. }
            | Error::UnsupportedScheme { .. }
            | Error::Http(_)
            | Error::HttpStatus { .. } => ErrorCategory::Fetch,
            Error::JsonParse(_) => ErrorCategory::Parse,
            Error::Schema { .. } => ErrorCategory::Schema,
            Error::Write { .. } | Error::Io(_) => ErrorCategory::Write,
        }
    }
}

/// Result type alias for api-to-sql
pub type Result<T> = std::result::Result<T, Error>;
