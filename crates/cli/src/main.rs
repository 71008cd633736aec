//! Airtable CLI - renames placeholder businesses in an Airtable table.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging.
//! - Run the selected command and map its outcome to an exit code.
//!
//! Does NOT handle:
//! - REST API details (see `crates/client`).
//! - Configuration validation (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Exactly one line describing a failure is printed to stderr (more with `--verbose`).

mod args;
mod commands;
mod dispatch;
mod error;
mod service;

use std::io::Write;

use airtable_config::ConfigLoader;
use args::{Cli, LogFormat};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("An unexpected error occurred: {}", e);
        std::process::exit(ExitCode::UnexpectedFailure.as_i32());
    }

    let cli = Cli::parse();
    init_logging(cli.log_format);

    let verbose = cli.verbose;
    let mut stdout = std::io::stdout();

    let exit_code = match run_command(cli, &mut stdout).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{}", e.report(verbose));
            e.exit_code()
        }
    };

    // process::exit skips destructors, so buffered output must be flushed here.
    let _ = stdout.flush();
    std::process::exit(exit_code.as_i32());
}
