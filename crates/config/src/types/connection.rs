//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (base URL, request timeout).
//!
//! Invariants:
//! - `base_url` is an absolute http(s) URL without a trailing slash once
//!   produced by the loader.

use std::time::Duration;

/// Connection settings for the Airtable REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Base URL of the API (e.g. `https://api.airtable.com/v0`)
    pub base_url: String,
    /// Request timeout applied to every HTTP call
    pub timeout: Duration,
}
