//! Configuration management for the Airtable business tools.
//!
//! This crate provides the configuration value object handed to the
//! Airtable client and a loader that assembles it from `.env` files,
//! environment variables, and explicit overrides.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig, TableConfig};
