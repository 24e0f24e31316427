//! # Design
//!
//! - Provide structured, constant-message errors for the collection pipeline.
//! - Capture the root, endpoint, or operation involved so failures are
//!   reproducible in tests.
//! - Preserve source errors without interpolating context into error messages.

use std::path::PathBuf;

use thiserror::Error;

use crate::client::ClientError;

/// Result type for inventory collection.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors produced while collecting or merging inventories.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A configured root could not be opened for traversal.
    #[error("inventory root unreadable")]
    RootUnreadable {
        /// The root directory that failed to open.
        path: PathBuf,
        /// Underlying traversal error.
        source: walkdir::Error,
    },
    /// A download-client endpoint failed during its query sequence.
    #[error("inventory endpoint failure")]
    Endpoint {
        /// Display name of the endpoint that failed.
        endpoint: String,
        /// Underlying client error.
        source: ClientError,
    },
    /// A spawned collection task aborted before reporting a result.
    #[error("inventory task failure")]
    Task {
        /// Operation whose task failed to complete.
        operation: &'static str,
        /// Underlying join error.
        source: tokio::task::JoinError,
    },
}

impl InventoryError {
    pub(crate) fn root_unreadable(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::RootUnreadable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn endpoint(endpoint: impl Into<String>, source: ClientError) -> Self {
        Self::Endpoint {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub(crate) fn task(operation: &'static str, source: tokio::task::JoinError) -> Self {
        Self::Task { operation, source }
    }
}
