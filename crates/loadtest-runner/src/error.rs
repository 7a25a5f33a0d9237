//! Error types for the load runner.

use thiserror::Error;

/// Errors that stop a load run. Individual task failures are counted in
/// the run metrics instead.
#[derive(Error, Debug)]
pub enum LoadTestError {
    /// Invalid run settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A scenario could not be prepared, e.g. its seeds dump is missing.
    #[error("Scenario setup error: {0}")]
    Setup(String),

    /// A virtual user task panicked or was cancelled.
    #[error("Virtual user error: {0}")]
    Worker(String),
}
