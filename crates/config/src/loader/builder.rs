//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Validate the merged values and produce the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables when applied after `from_env()`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_TIMEOUT_SECS, ENV_API_KEY, ENV_BASE_ID, ENV_BASE_URL, ENV_DOTENV_DISABLED, ENV_TABLE,
    MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, Config, ConnectionConfig, TableConfig};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    api_key: Option<SecretString>,
    base_id: Option<String>,
    table: Option<String>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// - `ConfigError::DotenvParse` when the file has invalid syntax
    /// - `ConfigError::DotenvIo` when the file exists but cannot be read
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the API base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the base identifier.
    pub fn with_base_id(mut self, base_id: String) -> Self {
        self.base_id = Some(base_id);
        self
    }

    /// Set the table name.
    pub fn with_table(mut self, table: String) -> Self {
        self.table = Some(table);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    ///
    /// Fails fast with `ConfigError::Missing` for the first absent required value,
    /// checked in the order base URL, API key, base ID, table.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self
            .base_url
            .as_deref()
            .map(validate_and_normalize_base_url)
            .transpose()?
            .ok_or(ConfigError::Missing {
                key: "base_url",
                env: ENV_BASE_URL,
            })?;

        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ConfigError::Missing {
                key: "api_key",
                env: ENV_API_KEY,
            })?;

        let base_id = non_blank(self.base_id).ok_or(ConfigError::Missing {
            key: "base_id",
            env: ENV_BASE_ID,
        })?;

        let table = non_blank(self.table).ok_or(ConfigError::Missing {
            key: "table",
            env: ENV_TABLE,
        })?;

        let connection = ConnectionConfig {
            base_url,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };

        Self::validate_timeout_config(&connection)?;

        Ok(Config {
            connection,
            auth: AuthConfig { api_key },
            table: TableConfig { base_id, table },
        })
    }

    /// Validates that the timeout is within `1..=MAX_TIMEOUT_SECS` seconds.
    fn validate_timeout_config(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    // Internal setters for use by other loader modules

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_api_key(&mut self, key: Option<SecretString>) {
        self.api_key = key;
    }

    pub(crate) fn set_base_id(&mut self, base_id: Option<String>) {
        self.base_id = base_id;
    }

    pub(crate) fn set_table(&mut self, table: Option<String>) {
        self.table = table;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Blank/whitespace-only is treated as missing
/// - Must parse as an absolute URL with an http or https scheme and a host
/// - Normalized by stripping trailing slashes
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::Missing {
            key: "base_url",
            env: ENV_BASE_URL,
        });
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://api.airtable.com/v0/): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. https://api.airtable.com/v0/)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
