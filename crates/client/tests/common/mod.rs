//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

use airtable_client::AirtableClient;
use secrecy::SecretString;

#[allow(unused_imports)]
pub use airtable_client::testing::load_fixture;

#[allow(unused_imports)]
pub use airtable_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "pat-test-key";
pub const TEST_BASE_ID: &str = "appTEST";
pub const TEST_TABLE: &str = "Businesses";
pub const TABLE_PATH: &str = "/appTEST/Businesses";

/// Table URL on the mock server, as the client would compute it.
#[allow(dead_code)]
pub fn table_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), TABLE_PATH)
}

/// Client bound to the test table on `server`.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> AirtableClient {
    test_client_with_timeout(server, Duration::from_secs(5))
}

#[allow(dead_code)]
pub fn test_client_with_timeout(server: &MockServer, timeout: Duration) -> AirtableClient {
    AirtableClient::builder()
        .base_url(format!("{}/", server.uri()))
        .api_key(SecretString::new(TEST_API_KEY.to_string().into()))
        .base_id(TEST_BASE_ID.to_string())
        .table(TEST_TABLE.to_string())
        .timeout(timeout)
        .build()
        .expect("test client should build")
}
