//! Main Airtable REST API client.
//!
//! This module provides [`AirtableClient`], bound to one table of one base.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `records`: Record list and batch update methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retries: every call is attempted exactly once
//!
//! # Invariants
//! - The table URL is computed once at construction and never changes.
//! - The API key is only exposed when building the `Authorization` header.

pub mod builder;
mod records;

use std::time::Duration;

use secrecy::SecretString;

/// Airtable REST API client for a single table.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use airtable_client::AirtableClient;
/// use secrecy::SecretString;
///
/// let client = AirtableClient::builder()
///     .base_url("https://api.airtable.com/v0/".to_string())
///     .api_key(SecretString::new("pat-token".to_string().into()))
///     .base_id("appABC123".to_string())
///     .table("Businesses".to_string())
///     .build()?;
/// ```
#[derive(Debug)]
pub struct AirtableClient {
    pub(crate) http: reqwest::Client,
    pub(crate) table_url: String,
    pub(crate) api_key: SecretString,
    pub(crate) timeout: Duration,
}

impl AirtableClient {
    /// Create a new client builder.
    pub fn builder() -> builder::AirtableClientBuilder {
        builder::AirtableClientBuilder::new()
    }

    /// Full URL of the table resource (`{base_url}/{base_id}/{table}`).
    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    /// Request timeout applied to every call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
