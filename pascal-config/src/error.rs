//! Error types for configuration handling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building endpoints or loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `scheme://host:port` is not a valid URL.
    #[error("Invalid endpoint '{endpoint}': {message}")]
    InvalidEndPoint {
        /// The endpoint as written.
        endpoint: String,
        /// Why it was rejected.
        message: String,
    },

    /// The configuration does not name a single endpoint.
    #[error("No endpoints configured")]
    NoEndPoints,

    /// The configuration file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for this schema.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration handling.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
