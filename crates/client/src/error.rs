//! Error types for the Airtable client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Airtable client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network-level failure (connection refused, DNS, reset).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response from the API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// A 2xx response whose JSON body has no `records` field.
    #[error("Airtable API response does not contain records. {body}")]
    MissingRecords { body: String },

    /// A 2xx response that is not JSON or whose records cannot be parsed.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request rejected locally before any I/O.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Coarse classification of a [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request did not produce a successful HTTP exchange.
    Transport,
    /// The API answered 2xx but the body violated the expected shape.
    Contract,
    /// The request was invalid before it was sent.
    Request,
}

impl ClientError {
    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::ApiError { .. } | Self::Timeout(_) => {
                ErrorCategory::Transport
            }
            Self::MissingRecords { .. } | Self::InvalidResponse(_) => ErrorCategory::Contract,
            Self::InvalidUrl(_) | Self::InvalidRequest(_) => ErrorCategory::Request,
        }
    }

    /// Check if this error is a transport failure.
    pub fn is_transport(&self) -> bool {
        self.category() == ErrorCategory::Transport
    }

    /// Check if this error is a contract failure.
    pub fn is_contract(&self) -> bool {
        self.category() == ErrorCategory::Contract
    }

    /// Check if this error indicates rejected credentials.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::ApiError { status: 401 | 403, .. })
    }
}
