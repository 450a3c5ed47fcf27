//! Crate-wide error type

use crate::config::ValidationError;
use crate::optim::SchedulerError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for calentar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the library and CLI
#[derive(Debug, Error)]
pub enum Error {
    /// Schedule file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schedule file is not valid YAML for the schema
    #[error("Failed to parse YAML config {path}: {message}")]
    ConfigParsing { path: PathBuf, message: String },

    /// Schedule file parsed but failed validation
    #[error("Invalid config: {0}")]
    Validation(#[from] ValidationError),

    /// Scheduler construction or application failed
    #[error("Scheduler error: {0}")]
    Scheduler(#[from] SchedulerError),

    /// Output could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Whether the error stems from user input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigParsing { .. } | Self::Validation(_) | Self::Scheduler(_)
        )
    }
}
