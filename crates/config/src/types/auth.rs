//! Authentication configuration.

use secrecy::SecretString;

/// Credentials for the Airtable REST API.
///
/// The API key is only exposed at the point where the `Authorization`
/// header is built; `Debug` output redacts it.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub api_key: SecretString,
}
