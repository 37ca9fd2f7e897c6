//! Gateway-specific error types.

use thiserror::Error;

use crate::application::ports::BrokerError;

/// Errors from the Shioaji gateway adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The HTTP client could not be built or the request was malformed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The bridge could not be reached or the connection dropped.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// The bridge returned an error status not covered below.
    #[error("API error: {code} - {message}")]
    Api {
        /// Error code from the bridge, or the HTTP status.
        code: String,
        /// Error message from the bridge.
        message: String,
    },

    /// Credentials refused or token missing/expired.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Too many requests.
    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Suggested retry delay in seconds.
        retry_after_secs: u64,
    },

    /// The requested resource does not exist.
    #[error("Not found: {path}")]
    NotFound {
        /// Request path.
        path: String,
    },

    /// The order was refused.
    #[error("Order rejected: {0}")]
    OrderRejected(String),

    /// Column-oriented data with columns of different lengths.
    #[error("Malformed market data: {0}")]
    MalformedData(String),
}

impl From<GatewayError> for BrokerError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Http(msg) | GatewayError::Network(msg) => {
                Self::ConnectionError { message: msg }
            }
            GatewayError::JsonParse(msg) | GatewayError::MalformedData(msg) => {
                Self::InvalidResponse { message: msg }
            }
            GatewayError::Api { code, message } => Self::Unknown {
                message: format!("{code}: {message}"),
            },
            GatewayError::AuthenticationFailed => Self::AuthenticationFailed,
            GatewayError::RateLimited { .. } => Self::RateLimited,
            GatewayError::NotFound { path } => Self::Unknown {
                message: format!("Not found: {path}"),
            },
            GatewayError::OrderRejected(reason) => Self::OrderRejected { reason },
        }
    }
}
