//! Download-client seam: the traits the remote collector drives and the
//! records an endpoint reports. Concrete Web API implementations live in
//! their own crate and plug in through [`Connect`].

use async_trait::async_trait;
use flotsam_config::EndpointConfig;
use thiserror::Error;

/// Separator convention used by download clients when reporting relative
/// file paths, regardless of the platform the client runs on.
pub const REMOTE_SEPARATOR: char = '/';

/// One managed download reported by an endpoint. Valid only for the
/// lifetime of one worker's query sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentSummary {
    /// Client-side identifier used to query the torrent's file list.
    pub id: String,
    /// Base directory the torrent's files resolve against.
    pub save_path: String,
}

/// One file belonging to a torrent, relative to its save path and using
/// [`REMOTE_SEPARATOR`] as its separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentContent {
    /// Relative path of the file within the torrent.
    pub path: String,
}

/// Errors surfaced by a download-client implementation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The endpoint rejected the configured credentials.
    #[error("client authentication rejected")]
    AuthRejected {
        /// Display name of the endpoint that rejected the login.
        endpoint: String,
    },
    /// The request could not be completed at the transport level.
    #[error("client transport failure")]
    Transport {
        /// Operation that triggered the transport failure.
        operation: &'static str,
        /// Underlying transport error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The endpoint answered with something the client cannot interpret.
    #[error("client unexpected response")]
    UnexpectedResponse {
        /// Operation that received the unexpected response.
        operation: &'static str,
        /// Short description of what was received.
        detail: String,
    },
}

impl ClientError {
    /// Wrap a transport-level failure with its operation label.
    pub fn transport(
        operation: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            operation,
            source: Box::new(source),
        }
    }
}

/// An authenticated session against one endpoint.
#[async_trait]
pub trait DownloadClient: Send + Sync {
    /// List every torrent the endpoint currently manages (filter "all").
    async fn torrents(&self) -> Result<Vec<TorrentSummary>, ClientError>;

    /// List the files belonging to one torrent.
    async fn torrent_files(&self, torrent_id: &str) -> Result<Vec<TorrentContent>, ClientError>;
}

/// Factory that establishes an authenticated session for an endpoint.
#[async_trait]
pub trait Connect: Send + Sync {
    /// Connect and authenticate against the given endpoint.
    async fn connect(&self, endpoint: &EndpointConfig) -> Result<Box<dyn DownloadClient>, ClientError>;
}
