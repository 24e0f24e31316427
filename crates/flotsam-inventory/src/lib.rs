//! Concurrent collection pipeline: gather the local filesystem inventory and
//! the remote download-client inventory in parallel, then reconcile the two
//! into a list of orphaned local files.
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

mod client;
mod error;
mod local;
mod normalize;
mod progress;
mod reconcile;
mod remote;
mod walk;

pub use client::{ClientError, Connect, DownloadClient, REMOTE_SEPARATOR, TorrentContent, TorrentSummary};
pub use error::{InventoryError, InventoryResult};
pub use local::collect_local;
pub use normalize::{NATIVE_SEPARATOR, fold_key, normalize_separators};
pub use progress::{ProgressGauge, ProgressSink, SilentProgress};
pub use reconcile::reconcile;
pub use remote::collect_remote;
pub use walk::walk_root;
