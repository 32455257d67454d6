//! Error types for ats-lint-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when loading a resume snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The input was not a well-formed snapshot document.
    #[error("invalid resume snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// The input exceeds the configured size limit.
    #[error("input is {actual} bytes, exceeding the {limit} byte limit")]
    TooLarge {
        /// Actual input size in bytes.
        actual: usize,
        /// Configured maximum in bytes.
        limit: usize,
    },
}

/// Result type alias using [`SnapshotError`].
pub type SnapshotResult<T> = Result<T, SnapshotError>;
