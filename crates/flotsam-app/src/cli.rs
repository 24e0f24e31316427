//! Command-line surface for one reconciliation run.

use std::path::PathBuf;

use clap::Parser;

/// Fixed-name file in the working directory listing one filesystem root
/// per line.
pub(crate) const ROOTS_FILE: &str = "paths.txt";

/// Report every local file no longer managed by any download client.
#[derive(Debug, Parser)]
#[command(name = "flotsam", version, about)]
pub struct Cli {
    /// Path to the TOML file describing the download-client endpoints.
    pub clients: PathBuf,

    /// File listing one local filesystem root per line.
    #[arg(long, default_value = ROOTS_FILE)]
    pub roots: PathBuf,

    /// Destination file for the orphan report.
    #[arg(long, default_value = "orphans.txt")]
    pub output: PathBuf,

    /// Per-request HTTP timeout in seconds for endpoint queries.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Suppress the interactive progress display.
    #[arg(long)]
    pub quiet: bool,

    /// Log level applied when RUST_LOG is not set.
    #[arg(long, env = "FLOTSAM_LOG", default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clients_config_is_required() {
        let err = Cli::try_parse_from(["flotsam"]).expect_err("missing positional should fail");
        assert!(err.to_string().contains("Usage"));
    }

    #[test]
    fn defaults_apply_when_only_clients_is_given() {
        let cli = Cli::try_parse_from(["flotsam", "clients.toml"]).expect("parse should succeed");
        assert_eq!(cli.clients, PathBuf::from("clients.toml"));
        assert_eq!(cli.roots, PathBuf::from(ROOTS_FILE));
        assert_eq!(cli.output, PathBuf::from("orphans.txt"));
        assert_eq!(cli.timeout, 30);
        assert!(!cli.quiet);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn output_and_quiet_are_overridable() {
        let cli = Cli::try_parse_from([
            "flotsam",
            "clients.toml",
            "--output",
            "report.txt",
            "--quiet",
        ])
        .expect("parse should succeed");
        assert_eq!(cli.output, PathBuf::from("report.txt"));
        assert!(cli.quiet);
    }
}
