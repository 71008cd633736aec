//! CLI command implementations.

pub mod list;
pub mod update;

use airtable_client::Record;
use anyhow::{Context, Result};
use tracing::info;

use crate::service::BusinessService;

/// Run the business lookup and log what came back.
///
/// The structured log event is emitted for every successful lookup, empty
/// or not, before any caller decides what an empty result means.
pub(crate) async fn retrieve_businesses<S: BusinessService>(service: &S) -> Result<Vec<Record>> {
    let businesses = service
        .lookup()
        .await
        .context("Failed to retrieve businesses")?;

    let records = serde_json::to_string(&businesses).context("Failed to serialize businesses")?;
    info!(count = businesses.len(), records = %records, "Retrieved businesses");

    Ok(businesses)
}
