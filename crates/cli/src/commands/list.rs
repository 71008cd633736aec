//! List command implementation.
//!
//! Prints the businesses the update command would rename, as pretty JSON.
//! An empty result is printed as `[]` and is not an error.

use std::io::Write;

use anyhow::{Context, Result};

use crate::commands::retrieve_businesses;
use crate::service::BusinessService;

pub async fn run<S: BusinessService>(service: &S, out: &mut impl Write) -> Result<()> {
    let businesses = retrieve_businesses(service).await?;

    let output =
        serde_json::to_string_pretty(&businesses).context("Failed to serialize businesses")?;
    writeln!(out, "{}", output)?;

    Ok(())
}
