//! Command-line orchestrator: load configuration, collect both inventories
//! concurrently, reconcile them, and write the orphan report.
#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions, clippy::multiple_crate_versions)]

mod cli;
mod error;
mod progress;
mod report;
mod run;
mod telemetry;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use run::{RunSummary, execute};
pub use telemetry::{LogFormat, init_logging};

use clap::Parser;

/// Parse CLI arguments, install logging, execute the reconciliation run,
/// and return the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(err) = telemetry::init_logging(&cli.log_level) {
        eprintln!("error: {err:#}");
        return error::EXIT_FAILURE;
    }

    match run::execute(&cli).await {
        Ok(summary) => {
            println!(
                "{} orphaned files written to {}",
                summary.orphans,
                cli.output.display()
            );
            0
        }
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}
