//! Error types for Tracker API operations.

use thiserror::Error;

/// Errors that can occur during Tracker API operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Configuration is missing or incomplete.
    #[error("Tracker configuration required: {0}")]
    ConfigMissing(String),

    /// Lookup of a field absent from the wrapped response.
    #[error("{entity_type} has no field '{field}'")]
    UnknownField {
        entity_type: &'static str,
        field: String,
    },

    /// API request failed.
    #[error("Tracker API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

/// Result type alias for Tracker operations.
pub type Result<T> = core::result::Result<T, TrackerError>;
