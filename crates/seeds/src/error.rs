//! Error types for seeding.

use gateway_types::TransportError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while planning, building or persisting seeds.
#[derive(Error, Debug)]
pub enum SeedsError {
    /// Malformed plan or malformed dump.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A gateway call failed; the build was aborted at that call.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// No dump exists for the scenario.
    #[error("Seeds dump not found: {}", .0.display())]
    NotFound(PathBuf),

    /// IO error while reading or writing a dump.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SeedsError>;
