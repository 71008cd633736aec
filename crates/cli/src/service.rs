//! Business lookup and rename policy.
//!
//! Responsibilities:
//! - Define which records count as "businesses to rename".
//! - Turn a set of records into the batch update that renames them.
//!
//! Does NOT handle:
//! - HTTP, authentication or response validation (see `airtable-client`).
//! - Deciding whether an empty lookup is a failure (see `commands::update`).
//!
//! Invariants:
//! - `lookup` returns exactly what the repository returned, including order.
//! - `batch_rename` issues exactly one repository update, even for no records.

use std::future::Future;

use airtable_client::{QueryFilter, Record, RecordUpdate, TableRepository};
use serde_json::{Map, Value};

use crate::error::ServiceError;

/// Field holding the business name.
pub const BUSINESS_NAME_FIELD: &str = "Business Name";

/// Business name selected for renaming.
pub const LOOKUP_BUSINESS_NAME: &str = "Test";

/// Name written by the default update.
pub const DEFAULT_BUSINESS_NAME: &str = "Airotax";

/// Fields written to every record of a batch.
///
/// The map replaces the named fields wholesale; it is never merged with the
/// record's current values.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSpec {
    fields: Map<String, Value>,
}

impl UpdateSpec {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Spec that sets the business name to `name`.
    pub fn rename_to(name: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(BUSINESS_NAME_FIELD.to_string(), Value::String(name.into()));
        Self::new(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Default for UpdateSpec {
    fn default() -> Self {
        Self::rename_to(DEFAULT_BUSINESS_NAME)
    }
}

/// Filter selecting records whose business name is exactly `"Test"`.
pub fn lookup_filter() -> QueryFilter {
    QueryFilter::exact_match(BUSINESS_NAME_FIELD, LOOKUP_BUSINESS_NAME)
}

/// One update per record, in input order, each carrying the full spec.
pub fn transform_records(records: &[Record], spec: &UpdateSpec) -> Vec<RecordUpdate> {
    records
        .iter()
        .map(|record| RecordUpdate::new(record.id.clone(), spec.fields().clone()))
        .collect()
}

/// Business-level operations over the business table.
pub trait BusinessService {
    /// Businesses selected for renaming, as returned by the table.
    fn lookup(&self) -> impl Future<Output = Result<Vec<Record>, ServiceError>> + Send;

    /// Write `spec` to every record in `records` with a single batch update.
    fn batch_rename(
        &self,
        records: &[Record],
        spec: &UpdateSpec,
    ) -> impl Future<Output = Result<Vec<Record>, ServiceError>> + Send;
}

/// [`BusinessService`] backed by a [`TableRepository`].
pub struct TableBusinessService<R> {
    repository: R,
}

impl<R: TableRepository> TableBusinessService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: TableRepository + Sync> BusinessService for TableBusinessService<R> {
    async fn lookup(&self) -> Result<Vec<Record>, ServiceError> {
        let filter = lookup_filter();
        Ok(self.repository.query(&filter).await?)
    }

    async fn batch_rename(
        &self,
        records: &[Record],
        spec: &UpdateSpec,
    ) -> Result<Vec<Record>, ServiceError> {
        let updates = transform_records(records, spec);
        tracing::debug!(count = updates.len(), "Renaming businesses");
        Ok(self.repository.update(&updates).await?)
    }
}
