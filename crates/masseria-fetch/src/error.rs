//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when sending a request or reading its reply.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be delivered.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The target could not be resolved against the base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The reply body could not be decoded.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// No reply within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Request body serialization failed.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

impl From<url::ParseError> for FetchError {
    fn from(e: url::ParseError) -> Self {
        FetchError::InvalidUrl(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}
