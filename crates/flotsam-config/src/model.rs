//! Configuration records consumed by the collection pipeline.

use serde::Deserialize;

/// One configured download-client endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointConfig {
    /// Display name used in diagnostics and progress labels.
    pub name: String,
    /// Host name or address of the client's Web API.
    pub host: String,
    /// TCP port of the client's Web API.
    pub port: u16,
    /// Whether to reach the client over TLS.
    #[serde(default)]
    pub use_tls: bool,
    /// Login user name; may be empty when the client skips authentication.
    #[serde(default)]
    pub username: String,
    /// Login password; may be empty when the client skips authentication.
    #[serde(default)]
    pub password: String,
}

/// Top-level shape of the endpoints TOML file.
#[derive(Debug, Deserialize)]
pub(crate) struct EndpointsFile {
    /// Configured client endpoints; an empty list is permitted.
    #[serde(default)]
    pub(crate) clients: Vec<EndpointConfig>,
}
