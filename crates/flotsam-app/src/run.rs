//! One end-to-end reconciliation run.

use std::sync::Arc;
use std::time::Duration;

use flotsam_config::{ConfigError, load_endpoints, load_roots};
use flotsam_inventory::{Connect, collect_local, collect_remote, reconcile};
use flotsam_qbit::QbitConnector;
use tracing::{info, warn};
use uuid::Uuid;

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use crate::progress;
use crate::report;

/// Outcome of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// Number of orphaned files in the written report.
    pub orphans: usize,
}

/// Load configuration, collect both inventories concurrently, reconcile
/// them, and write the orphan report.
///
/// The report file is only touched after both collections and the
/// reconciliation have succeeded; any fatal error leaves a previous run's
/// report in place.
///
/// # Errors
///
/// Returns a validation error for unusable configuration and an operational
/// failure when either collector or the report writer fails.
pub async fn execute(cli: &Cli) -> CliResult<RunSummary> {
    let run_id = Uuid::new_v4();
    info!(%run_id, "reconciliation run starting");

    let roots = load_roots(&cli.roots).map_err(config_error)?;
    let endpoints = load_endpoints(&cli.clients).map_err(config_error)?;
    if endpoints.is_empty() {
        // Zero endpoints means every local file would be reported; make the
        // operator say so explicitly rather than emitting a mass orphaning.
        return Err(CliError::validation(format!(
            "no download-client endpoints configured in {}",
            cli.clients.display()
        )));
    }
    if roots.is_empty() {
        warn!(roots = %cli.roots.display(), "no local roots configured");
    }

    let progress = progress::sink_for(cli.quiet);
    progress.note(&format!("download clients: {}", endpoints.len()));
    let connector: Arc<dyn Connect> =
        Arc::new(QbitConnector::new(Duration::from_secs(cli.timeout)));

    let (local, remote) = tokio::try_join!(
        collect_local(roots, Arc::clone(&progress)),
        collect_remote(connector, endpoints, Arc::clone(&progress)),
    )
    .map_err(CliError::failure)?;

    let orphans = reconcile(&local, &remote);
    report::write_report(&cli.output, &orphans).map_err(CliError::failure)?;

    info!(
        %run_id,
        local = local.len(),
        remote = remote.len(),
        orphans = orphans.len(),
        report = %cli.output.display(),
        "reconciliation run complete"
    );
    Ok(RunSummary {
        orphans: orphans.len(),
    })
}

fn config_error(err: ConfigError) -> CliError {
    CliError::validation(format!("{:#}", anyhow::Error::from(err)))
}
