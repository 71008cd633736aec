//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the configuration from environment and CLI overrides.
//! - Construct the client and business service.
//! - Route the parsed subcommand to its handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit codes or error printing (see `main()` and `error`).
//!
//! Invariants:
//! - Configuration is fully validated before any network call is made.

use std::io::Write;
use std::time::Duration;

use airtable_client::AirtableClient;
use airtable_config::{Config, ConfigError, ConfigLoader};
use anyhow::{Context, Result};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::commands::update::UpdateOptions;
use crate::service::{TableBusinessService, UpdateSpec};

/// Resolve configuration: environment first, then CLI flags on top.
fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new().from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref key) = cli.api_key {
        loader = loader.with_api_key(key.clone());
    }
    if let Some(ref base_id) = cli.base_id {
        loader = loader.with_base_id(base_id.clone());
    }
    if let Some(ref table) = cli.table {
        loader = loader.with_table(table.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }

    loader.build()
}

/// Dispatch CLI commands to their respective handlers.
///
/// Command output goes to `out`; progress logs go through `tracing`.
pub(crate) async fn run_command(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = load_config(&cli).context("Failed to load configuration")?;

    let client = AirtableClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to create Airtable client")?;
    let service = TableBusinessService::new(client);

    match cli.command {
        Commands::Update { rename_to, dry_run } => {
            let options = UpdateOptions {
                spec: UpdateSpec::rename_to(rename_to),
                dry_run,
            };
            commands::update::run(&service, &options, out).await?;
        }
        Commands::List => {
            commands::list::run(&service, out).await?;
        }
    }

    Ok(())
}
