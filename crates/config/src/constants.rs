//! Centralized constants for the Airtable workspace.
//!
//! Default values and environment variable names used across crates live
//! here to avoid duplicating magic values.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Environment Variables
// =============================================================================

/// Base URL of the Airtable REST API (e.g. `https://api.airtable.com/v0/`).
pub const ENV_BASE_URL: &str = "AIRTABLE_BASE_URL";

/// Personal access token / API key sent as a bearer token.
pub const ENV_API_KEY: &str = "AIRTABLE_API_KEY";

/// Identifier of the Airtable base (`app...`).
pub const ENV_BASE_ID: &str = "AIRTABLE_BASE_ID";

/// Name or identifier of the table holding business records.
pub const ENV_TABLE: &str = "AIRTABLE_TABLE";

/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "AIRTABLE_TIMEOUT";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
