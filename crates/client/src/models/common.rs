//! Error payloads returned by the Airtable API on non-2xx responses.

use serde::Deserialize;
use std::fmt;

/// Error body returned by Airtable.
///
/// Airtable sends either `{"error": {"type": "...", "message": "..."}}` or a
/// bare code such as `{"error": "NOT_FOUND"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorDetail {
    Detailed {
        #[serde(rename = "type")]
        error_type: String,
        #[serde(default)]
        message: Option<String>,
    },
    Code(String),
}

impl fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            ApiErrorDetail::Detailed {
                error_type,
                message: Some(message),
            } => write!(f, "{error_type}: {message}"),
            ApiErrorDetail::Detailed {
                error_type,
                message: None,
            } => write!(f, "{error_type}"),
            ApiErrorDetail::Code(code) => write!(f, "{code}"),
        }
    }
}
