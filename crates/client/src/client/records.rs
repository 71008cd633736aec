//! Record methods for [`AirtableClient`].
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints`])

use secrecy::ExposeSecret;

use crate::client::AirtableClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{QueryFilter, Record, RecordUpdate};

impl AirtableClient {
    /// List the records matching `filter`.
    pub async fn list_records(&self, filter: &QueryFilter) -> Result<Vec<Record>> {
        endpoints::list_records(
            &self.http,
            &self.table_url,
            self.api_key.expose_secret(),
            filter,
            self.timeout,
        )
        .await
    }

    /// Apply `updates` in a single batch PATCH.
    pub async fn update_records(&self, updates: &[RecordUpdate]) -> Result<Vec<Record>> {
        endpoints::update_records(
            &self.http,
            &self.table_url,
            self.api_key.expose_secret(),
            updates,
            self.timeout,
        )
        .await
    }
}
