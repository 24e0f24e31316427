//! File loading and validation for the roots list and the endpoints file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::model::{EndpointConfig, EndpointsFile};

/// Read the local roots file: one directory path per line, blank lines
/// ignored. An empty result is permitted; collection over zero roots simply
/// yields an empty local inventory.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_roots(path: &Path) -> ConfigResult<Vec<String>> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::io("roots.read", path, source))?;

    let roots: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!(path = %path.display(), count = roots.len(), "loaded local roots");
    Ok(roots)
}

/// Read and validate the endpoints TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, fails to parse, or contains
/// an endpoint record with an empty name, empty host, or zero port.
pub fn load_endpoints(path: &Path) -> ConfigResult<Vec<EndpointConfig>> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::io("endpoints.read", path, source))?;
    let parsed: EndpointsFile =
        toml::from_str(&raw).map_err(|source| ConfigError::toml(path, source))?;

    for endpoint in &parsed.clients {
        validate_endpoint(endpoint)?;
    }

    debug!(path = %path.display(), count = parsed.clients.len(), "loaded endpoints");
    Ok(parsed.clients)
}

fn validate_endpoint(endpoint: &EndpointConfig) -> ConfigResult<()> {
    if endpoint.name.trim().is_empty() {
        return Err(ConfigError::InvalidEndpoint {
            field: "name",
            reason: "empty",
            endpoint: None,
        });
    }
    if endpoint.host.trim().is_empty() {
        return Err(ConfigError::InvalidEndpoint {
            field: "host",
            reason: "empty",
            endpoint: Some(endpoint.name.clone()),
        });
    }
    if endpoint.port == 0 {
        return Err(ConfigError::InvalidEndpoint {
            field: "port",
            reason: "zero",
            endpoint: Some(endpoint.name.clone()),
        });
    }
    Ok(())
}
