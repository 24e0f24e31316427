//! Run-level error type distinguishing configuration mistakes from
//! operational failures.

use std::fmt::{self, Display, Formatter};

/// Exit code for configuration and validation mistakes.
pub(crate) const EXIT_VALIDATION: i32 = 2;

/// Exit code for operational failures.
pub(crate) const EXIT_FAILURE: i32 = 3;

/// Error raised by the reconciliation run.
#[derive(Debug)]
pub enum CliError {
    /// The operator supplied configuration the run cannot proceed with.
    Validation(String),
    /// The run failed while collecting or reporting.
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a [`CliError`].
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Build a validation error from a user-facing message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Build an operational failure from any error.
    pub fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    /// Process exit code associated with this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => EXIT_VALIDATION,
            Self::Failure(_) => EXIT_FAILURE,
        }
    }

    /// User-facing message, with the full error chain for failures.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}
