//! Request execution and response classification.
//!
//! Every endpoint goes through [`send_request`] and, for record payloads,
//! [`extract_records`]. Together they implement the failure split:
//! - network errors, timeouts, and non-2xx statuses are transport failures
//! - a 2xx response without a parseable `records` array is a contract failure
//!
//! The status check always happens before the body is inspected.

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::{ApiErrorResponse, Record};

/// Send a request and turn any non-2xx status into [`ClientError::ApiError`].
///
/// `timeout` is only used to report [`ClientError::Timeout`]; the deadline
/// itself is enforced by the underlying `reqwest::Client`.
pub async fn send_request(builder: RequestBuilder, timeout: Duration) -> Result<Response> {
    let response = builder
        .send()
        .await
        .map_err(|e| classify_reqwest_error(e, timeout))?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Prefer Airtable's error type/message over the raw body when it parses.
    let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(parsed) => parsed.to_string(),
        Err(_) => body,
    };

    debug!(status, url = %url, "Airtable request failed");

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}

/// Read a successful response body and return its `records` array.
///
/// # Errors
///
/// - [`ClientError::InvalidResponse`] if the body is not JSON or a record is malformed
/// - [`ClientError::MissingRecords`] if the JSON body has no `records` field or it is null
///
/// Both carry the response body for diagnostics.
pub async fn extract_records(response: Response, timeout: Duration) -> Result<Vec<Record>> {
    let text = response
        .text()
        .await
        .map_err(|e| classify_reqwest_error(e, timeout))?;

    let body: Value = serde_json::from_str(&text).map_err(|e| {
        ClientError::InvalidResponse(format!("expected a JSON body ({e}): {text}"))
    })?;

    // A null `records` counts as absent.
    let records = match body.get("records") {
        Some(records) if !records.is_null() => records,
        _ => {
            return Err(ClientError::MissingRecords {
                body: body.to_string(),
            });
        }
    };

    Vec::<Record>::deserialize(records).map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse records ({e}): {body}"))
    })
}

fn classify_reqwest_error(error: reqwest::Error, timeout: Duration) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout(timeout)
    } else {
        ClientError::HttpError(error)
    }
}
