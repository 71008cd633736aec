//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_API_KEY, ENV_BASE_ID, ENV_BASE_URL, ENV_TABLE, ENV_TIMEOUT};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(key) = env_var_or_none(ENV_API_KEY) {
        loader.set_api_key(Some(SecretString::new(key.into())));
    }
    if let Some(base_id) = env_var_or_none(ENV_BASE_ID) {
        loader.set_base_id(Some(base_id));
    }
    if let Some(table) = env_var_or_none(ENV_TABLE) {
        loader.set_table(Some(table));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    Ok(())
}
