//! Client builder for constructing [`AirtableClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required settings (base URL, API key, base ID, table)
//! - Normalizing the base URL and encoding the table path
//! - Configuring the underlying HTTP client timeout
//!
//! # Invariants
//! - All four location/credential settings must be provided before `build()`
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use airtable_config::{Config, constants::DEFAULT_TIMEOUT_SECS};
use secrecy::{ExposeSecret, SecretString};

use crate::client::AirtableClient;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`AirtableClient`].
pub struct AirtableClientBuilder {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    base_id: Option<String>,
    table: Option<String>,
    timeout: Duration,
}

impl Default for AirtableClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            base_id: None,
            table: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AirtableClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, e.g. `https://api.airtable.com/v0/`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API key sent as a bearer token.
    pub fn api_key(mut self, key: SecretString) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set the base identifier.
    pub fn base_id(mut self, base_id: String) -> Self {
        self.base_id = Some(base_id);
        self
    }

    /// Set the table name or identifier.
    pub fn table(mut self, table: String) -> Self {
        self.table = Some(table);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds. An expired deadline surfaces as
    /// [`ClientError::Timeout`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// ```rust,ignore
    /// let config = ConfigLoader::new().from_env()?.build()?;
    /// let client = AirtableClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.api_key = Some(config.auth.api_key.clone());
        self.base_id = Some(config.table.base_id.clone());
        self.table = Some(config.table.table.clone());
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://api.airtable.com/v0/"` -> `"https://api.airtable.com/v0"`
    /// - `"http://localhost:8080//"` -> `"http://localhost:8080"`
    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    fn required(value: Option<String>, name: &str) -> Result<String> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ClientError::InvalidRequest(format!("{name} is required")))
    }

    /// Build the [`AirtableClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidUrl`] if `base_url` is missing or blank
    /// - [`ClientError::InvalidRequest`] if `api_key`, `base_id` or `table` is missing or blank
    /// - [`ClientError::HttpError`] if the HTTP client fails to build
    pub fn build(self) -> Result<AirtableClient> {
        let base_url = self
            .base_url
            .as_deref()
            .map(Self::normalize_base_url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;

        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| ClientError::InvalidRequest("api_key is required".to_string()))?;

        let base_id = Self::required(self.base_id, "base_id")?;
        let table = Self::required(self.table, "table")?;

        let table_url = format!(
            "{}/{}/{}",
            base_url,
            encode_path_segment(&base_id),
            encode_path_segment(&table)
        );

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(AirtableClient {
            http,
            table_url,
            api_key,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airtable_config::ConfigLoader;

    fn complete_builder() -> AirtableClientBuilder {
        AirtableClient::builder()
            .base_url("https://api.airtable.com/v0/".to_string())
            .api_key(SecretString::new("pat-test".to_string().into()))
            .base_id("appABC123".to_string())
            .table("Businesses".to_string())
    }

    #[test]
    fn test_build_computes_table_url() {
        let client = complete_builder().build().unwrap();
        assert_eq!(
            client.table_url(),
            "https://api.airtable.com/v0/appABC123/Businesses"
        );
    }

    #[test]
    fn test_table_name_is_encoded() {
        let client = complete_builder()
            .table("Business Database".to_string())
            .build()
            .unwrap();
        assert_eq!(
            client.table_url(),
            "https://api.airtable.com/v0/appABC123/Business%20Database"
        );
    }

    #[test]
    fn test_missing_base_url() {
        let result = AirtableClient::builder()
            .api_key(SecretString::new("pat-test".to_string().into()))
            .base_id("appABC123".to_string())
            .table("Businesses".to_string())
            .build();
        assert!(matches!(result.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let result = complete_builder()
            .api_key(SecretString::new(" ".to_string().into()))
            .build();
        assert!(matches!(result.unwrap_err(), ClientError::InvalidRequest(_)));
    }

    #[test]
    fn test_missing_table_rejected() {
        let result = AirtableClient::builder()
            .base_url("https://api.airtable.com/v0/".to_string())
            .api_key(SecretString::new("pat-test".to_string().into()))
            .base_id("appABC123".to_string())
            .build();
        match result {
            Err(ClientError::InvalidRequest(message)) => assert!(message.contains("table")),
            other => panic!("Expected InvalidRequest, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let config = ConfigLoader::new()
            .with_base_url("http://localhost:8080/v0/".to_string())
            .with_api_key("pat-config".to_string())
            .with_base_id("appCFG".to_string())
            .with_table("Leads".to_string())
            .with_timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        let client = AirtableClient::builder().from_config(&config).build().unwrap();

        assert_eq!(client.table_url(), "http://localhost:8080/v0/appCFG/Leads");
        assert_eq!(client.timeout(), Duration::from_secs(5));
        assert_eq!(client.api_key.expose_secret(), "pat-config");
    }
}
