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
#![allow(clippy::multiple_crate_versions)]

//! Binary entrypoint for the orphan-file reconciliation tool.

use std::process;

/// Runs one reconciliation pass and exits with the run's status code.
#[tokio::main]
async fn main() {
    let exit_code = flotsam_app::run().await;
    if exit_code != 0 {
        process::exit(exit_code);
    }
}
