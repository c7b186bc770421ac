//! Application-wide error types using thiserror.

use stats_common::StatsError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Error from one of the library crates.
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// Failed to render the output.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result type for the CLI application.
pub type CliResult<T> = Result<T, CliError>;
