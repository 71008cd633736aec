//! Record list and batch update endpoints.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::endpoints::{extract_records, send_request};
use crate::error::{ClientError, Result};
use crate::models::{QueryFilter, Record, RecordUpdate, UpdateRecordsRequest};

/// List the records of a table that match `filter`.
///
/// Returns the `records` array exactly as the API ordered it. No pagination
/// is performed: only the first page is read.
pub async fn list_records(
    client: &Client,
    table_url: &str,
    api_key: &str,
    filter: &QueryFilter,
    timeout: Duration,
) -> Result<Vec<Record>> {
    debug!(url = %table_url, formula = %filter.formula(), "Listing records");

    let builder = client
        .get(table_url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .query(&filter.to_query_pairs());

    let response = send_request(builder, timeout).await?;
    let records = extract_records(response, timeout).await?;

    debug!(count = records.len(), "Listed records");
    Ok(records)
}

/// Apply a batch of field updates in a single PATCH.
///
/// Every update must carry a non-blank record id; otherwise the call fails
/// with [`ClientError::InvalidRequest`] before any request is sent. An empty
/// batch is sent as-is.
///
/// Returns the records echoed back by the API.
pub async fn update_records(
    client: &Client,
    table_url: &str,
    api_key: &str,
    updates: &[RecordUpdate],
    timeout: Duration,
) -> Result<Vec<Record>> {
    if let Some(position) = updates.iter().position(|u| u.id.trim().is_empty()) {
        return Err(ClientError::InvalidRequest(format!(
            "record update at position {position} has an empty id"
        )));
    }

    debug!(url = %table_url, count = updates.len(), "Updating records");

    let builder = client
        .patch(table_url)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&UpdateRecordsRequest { records: updates });

    let response = send_request(builder, timeout).await?;
    let records = extract_records(response, timeout).await?;

    match serde_json::to_string(&records) {
        Ok(json) => info!(count = records.len(), records = %json, "Updated records"),
        Err(e) => debug!(error = %e, "Could not serialize updated records for logging"),
    }

    Ok(records)
}
