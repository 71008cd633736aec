//! Shared test utilities for airtable-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide canned Airtable responses for the business table.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Credentials and table location are set to dummy values; only the base
//!   URL is left for each test to point at its mock server.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{Value, json};

pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TABLE_PATH: &str = "/appTEST/Businesses";

/// Returns a hermetic `airtable-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - API key, base id and table are set to dummy values.
/// - `AIRTABLE_BASE_URL`, `AIRTABLE_TIMEOUT` and `RUST_LOG` are cleared.
pub fn airtable_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("airtable-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("AIRTABLE_API_KEY", "pat-test-key")
        .env("AIRTABLE_BASE_ID", "appTEST")
        .env("AIRTABLE_TABLE", "Businesses")
        .env("NO_COLOR", "1");

    // Clear potential host leakage
    cmd.env_remove("AIRTABLE_BASE_URL")
        .env_remove("AIRTABLE_TIMEOUT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `airtable-cli` command pointed at `server`.
pub fn airtable_cmd_for(server: &MockServer) -> Command {
    let mut cmd = airtable_cmd();
    cmd.env("AIRTABLE_BASE_URL", server.uri());
    cmd
}

/// Two records named "Test", as returned by the lookup.
pub fn test_businesses() -> Value {
    json!({
        "records": [
            {
                "id": "recBVL2h8rMfTAjCW",
                "createdTime": "2024-01-08T15:58:50.000Z",
                "fields": { "Business Name": "Test" }
            },
            {
                "id": "recQ3o1tWmGzdZ9xY",
                "createdTime": "2024-01-09T09:12:03.000Z",
                "fields": { "Business Name": "Test" }
            }
        ]
    })
}

/// The same two records after renaming.
pub fn renamed_businesses(name: &str) -> Value {
    json!({
        "records": [
            {
                "id": "recBVL2h8rMfTAjCW",
                "createdTime": "2024-01-08T15:58:50.000Z",
                "fields": { "Business Name": name }
            },
            {
                "id": "recQ3o1tWmGzdZ9xY",
                "createdTime": "2024-01-09T09:12:03.000Z",
                "fields": { "Business Name": name }
            }
        ]
    })
}
