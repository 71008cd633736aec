//! CLI exit codes and error reporting.
//!
//! Responsibilities:
//! - Define the three process exit codes scripts can rely on.
//! - Classify an `anyhow::Error` as a business failure or an unexpected one.
//! - Render the single error line printed to stderr.
//!
//! Does NOT handle:
//! - Deciding when a business rule is violated (see `commands::update`).
//!
//! Invariants:
//! - An error is a business failure only if a `BusinessError` appears somewhere
//!   in its source chain; everything else is unexpected.

use std::error::Error as StdError;

use airtable_client::ClientError;
use airtable_config::constants::ENV_API_KEY;
use thiserror::Error;

/// Structured exit codes for airtable-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The command completed.
    Success = 0,

    /// A business rule was violated, e.g. no matching businesses exist.
    BusinessFailure = 1,

    /// Anything else: transport, contract, configuration or I/O failures.
    UnexpectedFailure = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Domain failures that are expected outcomes rather than faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BusinessError {
    #[error("No businesses found.")]
    NoBusinessesFound,
}

/// Failure of a [`crate::service::BusinessService`] operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Business(#[from] BusinessError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

fn as_business_error<'a>(cause: &'a (dyn StdError + 'static)) -> Option<&'a BusinessError> {
    if let Some(business) = cause.downcast_ref::<BusinessError>() {
        return Some(business);
    }
    match cause.downcast_ref::<ServiceError>() {
        Some(ServiceError::Business(business)) => Some(business),
        _ => None,
    }
}

fn as_client_error<'a>(cause: &'a (dyn StdError + 'static)) -> Option<&'a ClientError> {
    if let Some(client) = cause.downcast_ref::<ClientError>() {
        return Some(client);
    }
    match cause.downcast_ref::<ServiceError>() {
        Some(ServiceError::Client(client)) => Some(client),
        _ => None,
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// The business error somewhere in this error's chain, if any.
    fn business_error(&self) -> Option<&BusinessError>;

    /// Extract the appropriate exit code from this error.
    fn exit_code(&self) -> ExitCode {
        if self.business_error().is_some() {
            ExitCode::BusinessFailure
        } else {
            ExitCode::UnexpectedFailure
        }
    }

    /// The line printed to stderr for this error.
    ///
    /// Rejected credentials (401/403) add a hint line. With `verbose`, the
    /// full context chain is appended, one cause per line.
    fn report(&self, verbose: bool) -> String;
}

impl ExitCodeExt for anyhow::Error {
    fn business_error(&self) -> Option<&BusinessError> {
        self.chain().find_map(as_business_error)
    }

    fn report(&self, verbose: bool) -> String {
        let mut line = match self.business_error() {
            Some(business) => format!("Business error: {business}"),
            None => format!("An unexpected error occurred: {self:#}"),
        };

        if self
            .chain()
            .filter_map(as_client_error)
            .any(ClientError::is_auth_error)
        {
            line.push_str(&format!(
                "\nHint: check {ENV_API_KEY} and that the token can access this base and table."
            ));
        }

        if verbose {
            line.push_str("\n\nCaused by:");
            for (depth, cause) in self.chain().enumerate() {
                line.push_str(&format!("\n    {depth}: {cause}"));
            }
        }

        line
    }
}
