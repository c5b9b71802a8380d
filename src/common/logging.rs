//! Structured logging setup.
//!
//! Logs go to stderr so they never interleave with the menu on stdout.

use tracing_subscriber::EnvFilter;

use crate::common::error::AppError;

/// Log output format options
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line format
    Pretty,
    /// Single-line format
    Compact,
    /// JSON lines
    Json,
}

/// Initialize the global subscriber. Fails if the filter does not parse or a
/// subscriber is already installed.
pub fn init_logging(filter: &str, format: LogFormat) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|e| AppError::Logging(e.to_string()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = match format {
        LogFormat::Pretty => subscriber.pretty().try_init(),
        LogFormat::Compact => subscriber.compact().try_init(),
        LogFormat::Json => subscriber.json().try_init(),
    };
    result.map_err(|e| AppError::Logging(e.to_string()))?;

    tracing::debug!(?format, filter, "logging initialized");
    Ok(())
}
