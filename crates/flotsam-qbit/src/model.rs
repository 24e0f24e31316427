//! Wire-format records returned by the qBittorrent Web API. Only the fields
//! the collection pipeline consumes are deserialised.

use serde::Deserialize;

/// One entry from `torrents/info`.
#[derive(Debug, Deserialize)]
pub(crate) struct TorrentInfo {
    /// Torrent hash, used as the identifier for follow-up queries.
    pub(crate) hash: String,
    /// Directory the torrent's files resolve against.
    pub(crate) save_path: String,
}

/// One entry from `torrents/files`.
#[derive(Debug, Deserialize)]
pub(crate) struct TorrentFileEntry {
    /// Path of the file relative to the torrent's save path.
    pub(crate) name: String,
}
