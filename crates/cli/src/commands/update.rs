//! Update command implementation.
//!
//! Responsibilities:
//! - Drive the rename flow: lookup, empty guard, one batch update.
//! - Print the progress lines users and scripts rely on.
//!
//! Does NOT handle:
//! - Exit code selection or error printing (see `error` and `main`).
//!
//! Invariants:
//! - No update is attempted when the lookup fails or finds nothing.
//! - At most one batch update per run; nothing is retried.

use std::io::Write;

use anyhow::{Context, Result};
use serde_json::json;

use crate::commands::retrieve_businesses;
use crate::error::BusinessError;
use crate::service::{BusinessService, UpdateSpec, transform_records};

/// Options for a single `update` run.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub spec: UpdateSpec,
    /// Print the batch that would be sent instead of sending it.
    pub dry_run: bool,
}

pub async fn run<S: BusinessService>(
    service: &S,
    options: &UpdateOptions,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Retrieving businesses...")?;
    let businesses = retrieve_businesses(service).await?;

    if businesses.is_empty() {
        return Err(BusinessError::NoBusinessesFound.into());
    }

    let records = serde_json::to_string(&businesses).context("Failed to serialize businesses")?;
    writeln!(
        out,
        "Businesses retrieved successfully. Found {} businesses. {}",
        businesses.len(),
        records
    )?;

    if options.dry_run {
        let updates = transform_records(&businesses, &options.spec);
        let payload = serde_json::to_string_pretty(&json!({ "records": updates }))
            .context("Failed to serialize update payload")?;
        writeln!(
            out,
            "Dry run: would update {} businesses with:\n{}",
            updates.len(),
            payload
        )?;
        return Ok(());
    }

    writeln!(out, "Updating business names...")?;
    service
        .batch_rename(&businesses, &options.spec)
        .await
        .context("Failed to update business names")?;
    writeln!(out, "Business names updated successfully.")?;

    Ok(())
}
