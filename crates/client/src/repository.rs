//! Remote table access abstraction.

use std::future::Future;

use crate::client::AirtableClient;
use crate::error::Result;
use crate::models::{QueryFilter, Record, RecordUpdate};

/// Read and batch-update access to one remote table.
///
/// [`AirtableClient`] is the production implementation; higher layers take
/// any `TableRepository` through their constructor so they can be exercised
/// against in-memory fakes.
pub trait TableRepository {
    /// Records matching `filter`, in the order returned by the remote store.
    fn query(&self, filter: &QueryFilter) -> impl Future<Output = Result<Vec<Record>>> + Send;

    /// Apply all `updates` in one call. Returns the records the store echoed back.
    fn update(&self, updates: &[RecordUpdate])
    -> impl Future<Output = Result<Vec<Record>>> + Send;
}

impl TableRepository for AirtableClient {
    async fn query(&self, filter: &QueryFilter) -> Result<Vec<Record>> {
        self.list_records(filter).await
    }

    async fn update(&self, updates: &[RecordUpdate]) -> Result<Vec<Record>> {
        self.update_records(updates).await
    }
}
