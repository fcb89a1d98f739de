//! API error types for the smart-me REST API client.

use thiserror::Error;

/// API-specific error type for the smart-me REST API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client constructed without a username
    #[error("username must not be empty")]
    EmptyUsername,

    /// Device-scoped call made without a device ID
    #[error("deviceID must not be empty")]
    EmptyDeviceId,

    /// Base URL override could not be parsed
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The rejected input
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a status code >= 400
    #[error("API error: {status_text} (status code: {status_code})")]
    Status {
        /// Numeric status code
        status_code: u16,
        /// Status line text, e.g. "500 Internal Server Error"
        status_text: String,
    },

    /// Request body could not be encoded
    #[error("error encoding request: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Response body is not the expected JSON
    #[error("error decoding response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request context was cancelled
    #[error("context canceled")]
    Cancelled,

    /// The request context's deadline passed
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a response status.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        let status_text = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };
        ApiError::Status {
            status_code: status.as_u16(),
            status_text,
        }
    }

    /// HTTP status code, if the API answered with an error status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Whether the error was raised locally, before any network I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ApiError::EmptyUsername
                | ApiError::EmptyDeviceId
                | ApiError::InvalidBaseUrl { .. }
                | ApiError::InvalidParameter(_)
        )
    }

    /// Whether the error comes from the request context (cancellation or deadline).
    pub fn is_context(&self) -> bool {
        matches!(self, ApiError::Cancelled | ApiError::DeadlineExceeded)
    }
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
