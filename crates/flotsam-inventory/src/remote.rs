//! Fan-out/fan-in collection of the remote inventory across every endpoint.

use std::sync::Arc;

use flotsam_config::EndpointConfig;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::client::{ClientError, Connect, REMOTE_SEPARATOR};
use crate::error::{InventoryError, InventoryResult};
use crate::normalize::{NATIVE_SEPARATOR, normalize_separators};
use crate::progress::{ProgressGauge, ProgressSink};

/// Upper bound on in-flight remote paths between workers and the drain task.
const PATH_CHANNEL_CAPACITY: usize = 1024;

/// Number of torrents between progress ticks on an endpoint gauge.
const PROGRESS_BATCH: u64 = 1000;

/// Query every endpoint concurrently and merge the full remote-managed file
/// paths into one unordered collection, rewritten to the native separator
/// convention.
///
/// One worker task runs per endpoint; a single drain task owns the merged
/// buffer and stops once every worker has dropped its sender. Workers
/// report per-endpoint progress in batches of [`PROGRESS_BATCH`] torrents.
///
/// # Errors
///
/// The first endpoint failure (authentication, transport, or malformed
/// response) aborts the whole collection; no partial remote inventory is
/// returned.
pub async fn collect_remote(
    connector: Arc<dyn Connect>,
    endpoints: Vec<EndpointConfig>,
    progress: Arc<dyn ProgressSink>,
) -> InventoryResult<Vec<String>> {
    let (tx, mut rx) = mpsc::channel::<String>(PATH_CHANNEL_CAPACITY);

    let drain = tokio::spawn(async move {
        let mut files = Vec::new();
        while let Some(path) = rx.recv().await {
            files.push(path);
        }
        files
    });

    let mut workers = Vec::with_capacity(endpoints.len());
    for endpoint in endpoints {
        let connector = Arc::clone(&connector);
        let progress = Arc::clone(&progress);
        let tx = tx.clone();
        workers.push(tokio::spawn(async move {
            endpoint_worker(connector.as_ref(), &endpoint, progress.as_ref(), &tx)
                .await
                .map_err(|source| InventoryError::endpoint(endpoint.name.clone(), source))
        }));
    }
    drop(tx);

    let mut first_error = None;
    for worker in workers {
        match worker.await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
            Err(source) => {
                if first_error.is_none() {
                    first_error = Some(InventoryError::task("endpoint worker", source));
                }
            }
        }
    }

    let files = drain
        .await
        .map_err(|source| InventoryError::task("remote drain", source))?;

    if let Some(err) = first_error {
        return Err(err);
    }

    debug!(count = files.len(), "remote inventory collected");
    progress.note(&format!("remote files: {}", files.len()));
    Ok(files)
}

/// Stream every full file path managed by one endpoint into `tx`.
async fn endpoint_worker(
    connector: &dyn Connect,
    endpoint: &EndpointConfig,
    progress: &dyn ProgressSink,
    tx: &mpsc::Sender<String>,
) -> Result<(), ClientError> {
    let client = connector.connect(endpoint).await?;
    let torrents = client.torrents().await?;
    info!(
        endpoint = %endpoint.name,
        torrents = torrents.len(),
        "endpoint session established"
    );

    let gauge = progress.gauge(&endpoint.name, torrents.len() as u64);
    let mut since_tick = 0u64;

    for torrent in &torrents {
        let base = torrent
            .save_path
            .trim_end_matches(['/', '\\'])
            .to_string();
        for content in client.torrent_files(&torrent.id).await? {
            let relative =
                normalize_separators(&content.path, REMOTE_SEPARATOR, NATIVE_SEPARATOR);
            let sep = NATIVE_SEPARATOR;
            let full = format!("{base}{sep}{relative}");
            if tx.send(full).await.is_err() {
                // Drain gone: another endpoint already failed the run.
                return Ok(());
            }
        }
        since_tick += 1;
        if since_tick == PROGRESS_BATCH {
            gauge.advance(since_tick);
            since_tick = 0;
        }
    }

    flush_gauge(gauge.as_ref(), since_tick);
    Ok(())
}

fn flush_gauge(gauge: &dyn ProgressGauge, remainder: u64) {
    if remainder > 0 {
        gauge.advance(remainder);
    }
    gauge.finish();
}
