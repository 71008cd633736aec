//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration (see `airtable_config::ConfigLoader`).

use clap::{Parser, Subcommand, ValueEnum};

use crate::service::DEFAULT_BUSINESS_NAME;

#[derive(Parser)]
#[command(name = "airtable-cli")]
#[command(about = "Rename placeholder businesses in an Airtable table", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  airtable-cli update\n  airtable-cli update --dry-run\n  airtable-cli update --rename-to 'Airotax Ltd'\n  airtable-cli --table Leads list\n"
)]
pub struct Cli {
    /// Base URL of the Airtable API (e.g., https://api.airtable.com/v0/)
    #[arg(long, global = true, env = "AIRTABLE_BASE_URL")]
    pub base_url: Option<String>,

    /// API key or personal access token
    #[arg(long, global = true, env = "AIRTABLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Identifier of the Airtable base (app...)
    #[arg(long, global = true, env = "AIRTABLE_BASE_ID")]
    pub base_id: Option<String>,

    /// Table name or identifier
    #[arg(long, global = true, env = "AIRTABLE_TABLE")]
    pub table: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "AIRTABLE_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Log output format (logs are written to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Print the full error chain on failure
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rename every business called "Test" in one batch update
    Update {
        /// Business name written to every matching record
        #[arg(long, value_name = "NAME", default_value = DEFAULT_BUSINESS_NAME)]
        rename_to: String,

        /// Show the update that would be sent without sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// List the businesses that `update` would rename
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
