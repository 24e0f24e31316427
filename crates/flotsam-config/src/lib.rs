//! Configuration inputs for the reconciliation run: the local roots file and
//! the download-client endpoints file.
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

mod error;
mod loader;
mod model;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_endpoints, load_roots};
pub use model::EndpointConfig;
