//! Data models for Airtable API requests and responses.

pub mod common;
pub mod filter;
pub mod record;

pub use common::{ApiErrorDetail, ApiErrorResponse};
pub use filter::QueryFilter;
pub use record::{Record, RecordUpdate, UpdateRecordsRequest};
