//! Client configuration loaded from TOML.
//!
//! ```toml
//! request_timeout_ms = 10000
//!
//! [[endpoints]]
//! host = "127.0.0.1"
//! port = 4003
//!
//! [[endpoints]]
//! host = "node.example.org"
//! scheme = "https"
//! port = 443
//! ```

use crate::endpoint::EndPoint;
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Default request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Settings of an RPC client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Transport timeout per request in milliseconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    /// Nodes a request may be sent to, one is picked per call.
    #[serde(default)]
    pub endpoints: Vec<EndPoint>,
}

const fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_request_timeout(),
            endpoints: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given endpoints.
    #[must_use]
    pub fn with_endpoints(endpoints: Vec<EndPoint>) -> Self {
        Self {
            endpoints,
            ..Self::default()
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or invalid endpoints.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file can not be read, `ConfigError::Parse`
    /// if it is not valid, and `ConfigError::NoEndPoints` if it lists no endpoint.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        config.validate()?;
        debug!(
            path = %path.display(),
            endpoints = config.endpoints.len(),
            "loaded client configuration"
        );
        Ok(config)
    }

    /// Checks that at least one endpoint is configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoEndPoints` for an empty endpoint list.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.endpoints.is_empty() {
            return Err(ConfigError::NoEndPoints);
        }
        Ok(())
    }

    /// The request timeout as a `Duration`.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
