//! FinMind client errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from the FinMind client and its token file.
#[derive(Debug, Error)]
pub enum FinMindError {
    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Request failed before a response arrived.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body is not the expected JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// The API answered with a non-200 status.
    #[error("FinMind API error {status}: {message}")]
    Api {
        /// Status reported by the API (body `status`, or the HTTP status).
        status: u16,
        /// Message reported by the API.
        message: String,
    },

    /// Start date is after end date.
    #[error("invalid date range: {start} is after {end}")]
    InvalidRange {
        /// Requested start date.
        start: NaiveDate,
        /// Requested end date.
        end: NaiveDate,
    },

    /// Token file does not exist.
    #[error("token file not found: {path}")]
    TokenNotFound {
        /// Path that was checked.
        path: String,
    },

    /// Token file could not be read.
    #[error("failed to read token file '{path}': {source}")]
    TokenRead {
        /// Path to the token file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Token file is not JSON with a `token` field.
    #[error("failed to parse token file '{path}': {source}")]
    TokenParse {
        /// Path to the token file.
        path: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The user's home directory could not be determined.
    #[error("cannot determine home directory")]
    NoHomeDir,
}
