//! # Design
//!
//! - Provide structured, constant-message errors for configuration loading.
//! - Capture the offending path or field so failures are reproducible in tests.
//! - Preserve source errors without interpolating context into error messages.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors produced while loading the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO failures while reading a configuration file.
    #[error("config io failure")]
    Io {
        /// Operation that triggered the IO failure.
        operation: &'static str,
        /// Path involved in the IO failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// TOML parsing failures for the endpoints file.
    #[error("config toml failure")]
    Toml {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
    /// Endpoint record validation failures.
    #[error("config invalid endpoint")]
    InvalidEndpoint {
        /// Field that failed validation.
        field: &'static str,
        /// Static reason for the failure.
        reason: &'static str,
        /// Display name of the offending endpoint when available.
        endpoint: Option<String>,
    },
}

impl ConfigError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn config_error_helpers_build_variants() {
        let io_err = ConfigError::io("read", "paths.txt", io::Error::other("io"));
        assert!(matches!(io_err, ConfigError::Io { .. }));
        assert!(io_err.source().is_some());

        let Err(toml_error) = toml::from_str::<toml::Value>("= broken") else {
            panic!("expected toml error");
        };
        let toml_err = ConfigError::toml("clients.toml", toml_error);
        assert!(matches!(toml_err, ConfigError::Toml { .. }));
        assert!(toml_err.source().is_some());
    }
}
