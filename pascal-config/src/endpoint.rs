//! Node endpoint type

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Default JSON-RPC port of a PascalCoin node.
pub const DEFAULT_RPC_PORT: u16 = 4003;

/// URL scheme used to reach a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Plain HTTP
    #[default]
    Http,
    /// HTTP over TLS
    Https,
}

impl Scheme {
    /// Returns the scheme as used in URLs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl FromStr for Scheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(ConfigError::InvalidEndPoint {
                endpoint: s.to_string(),
                message: format!("unsupported scheme '{other}'"),
            }),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address of a node's JSON-RPC interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EndPointTable", into = "EndPointTable")]
pub struct EndPoint {
    host: String,
    port: u16,
    scheme: Scheme,
    url: Url,
}

impl EndPoint {
    /// Creates an endpoint, validating the assembled URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEndPoint` if `scheme://host:port` is not a
    /// valid URL with a host.
    pub fn new(host: impl Into<String>, port: u16, scheme: Scheme) -> ConfigResult<Self> {
        let host = host.into();
        let raw = format!("{scheme}://{host}:{port}");
        let invalid = |message: String| ConfigError::InvalidEndPoint {
            endpoint: raw.clone(),
            message,
        };

        if host.trim().is_empty() {
            return Err(invalid("empty host".to_string()));
        }
        let url = Url::parse(&raw).map_err(|err| invalid(err.to_string()))?;
        if url.host_str().is_none() || url.path() != "/" {
            return Err(invalid("expected scheme://host:port".to_string()));
        }

        Ok(Self {
            host,
            port,
            scheme,
            url,
        })
    }

    /// Creates an `http` endpoint on the default RPC port.
    ///
    /// # Errors
    ///
    /// See [`EndPoint::new`].
    pub fn with_host(host: impl Into<String>) -> ConfigResult<Self> {
        Self::new(host, DEFAULT_RPC_PORT, Scheme::Http)
    }

    /// Host name or address.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// TCP port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// URL scheme.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The validated URL requests are posted to.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for EndPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}

impl FromStr for EndPoint {
    type Err = ConfigError;

    /// Accepts `host`, `host:port` or `scheme://host:port`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (scheme, rest) = match s.split_once("://") {
            Some((scheme, rest)) => (scheme.parse::<Scheme>()?, rest),
            None => (Scheme::Http, s),
        };
        let rest = rest.trim_end_matches('/');

        match rest.rsplit_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>().map_err(|err| ConfigError::InvalidEndPoint {
                    endpoint: s.to_string(),
                    message: format!("invalid port: {err}"),
                })?;
                Self::new(host, port, scheme)
            }
            None => Self::new(rest, DEFAULT_RPC_PORT, scheme),
        }
    }
}

/// Serialized shape of an endpoint: `host`, optional `port`, optional `scheme`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EndPointTable {
    host: String,
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default)]
    scheme: Scheme,
}

const fn default_port() -> u16 {
    DEFAULT_RPC_PORT
}

impl TryFrom<EndPointTable> for EndPoint {
    type Error = ConfigError;

    fn try_from(table: EndPointTable) -> Result<Self, Self::Error> {
        Self::new(table.host, table.port, table.scheme)
    }
}

impl From<EndPoint> for EndPointTable {
    fn from(endpoint: EndPoint) -> Self {
        Self {
            host: endpoint.host,
            port: endpoint.port,
            scheme: endpoint.scheme,
        }
    }
}
