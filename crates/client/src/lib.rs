//! Airtable REST API client.
//!
//! This crate provides a typed client for reading and batch-updating records
//! in a single Airtable table. Failures are classified into transport
//! failures (network, timeout, non-2xx) and contract failures (a 2xx response
//! that does not have the expected shape).

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod repository;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::AirtableClient;
pub use client::builder::AirtableClientBuilder;
pub use error::{ClientError, ErrorCategory, Result};
pub use models::{QueryFilter, Record, RecordUpdate};
pub use repository::TableRepository;
