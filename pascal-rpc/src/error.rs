//! Error types for RPC operations.

use crate::client::models::ModelError;
use crate::client::TransportError;
use crate::error_code::RpcErrorCode;
use pascal_config::ConfigError;
use pascal_primitives::PrimitiveError;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to a PascalCoin node.
#[derive(Error, Debug)]
pub enum RpcError {
    /// The node could not be reached or the body could not be read.
    #[error("Connection to {endpoint} failed: {message}")]
    Connection {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// Transport error message.
        message: String,
    },

    /// The node answered with a JSON-RPC error object.
    #[error("Node error {code}: {message}")]
    Rpc {
        /// Error code reported by the node.
        code: i64,
        /// Error message reported by the node.
        message: String,
        /// Optional extra data attached to the error.
        data: Option<Value>,
    },

    /// No endpoint was configured or passed for the call.
    #[error("No endpoints available")]
    NoEndPoint,

    /// The response body is not a usable JSON-RPC response.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },

    /// A result could not be mapped into an entity.
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// A caller supplied value failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] PrimitiveError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl RpcError {
    /// Create a node error.
    pub fn rpc<S: Into<String>>(code: i64, message: S, data: Option<Value>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
            data,
        }
    }

    /// Create an invalid response error.
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Classified code of a node error, `None` for every other variant.
    #[must_use]
    pub fn error_code(&self) -> Option<RpcErrorCode> {
        match self {
            Self::Rpc { code, .. } => Some(RpcErrorCode::from_code(*code)),
            _ => None,
        }
    }

    /// True when this is a node error whose code is in the known catalog.
    #[must_use]
    pub fn is_known_error(&self) -> bool {
        self.error_code().is_some_and(RpcErrorCode::is_known)
    }
}

impl From<TransportError> for RpcError {
    fn from(err: TransportError) -> Self {
        Self::Connection {
            endpoint: err.endpoint,
            message: err.message,
        }
    }
}

/// Result type for RPC operations.
pub type RpcResult<T> = std::result::Result<T, RpcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_error_exposes_its_code() {
        let err = RpcError::rpc(1002, "Invalid account", None);
        assert_eq!(err.error_code(), Some(RpcErrorCode::InvalidAccount));
        assert!(err.is_known_error());
        assert_eq!(err.to_string(), "Node error 1002: Invalid account");
    }

    #[test]
    fn unknown_code_is_not_known() {
        let err = RpcError::rpc(9999, "weird", None);
        assert_eq!(err.error_code(), Some(RpcErrorCode::Unknown));
        assert!(!err.is_known_error());
    }

    #[test]
    fn other_variants_have_no_code() {
        assert_eq!(RpcError::NoEndPoint.error_code(), None);
        assert!(!RpcError::invalid_response("bad").is_known_error());
    }

    #[test]
    fn transport_error_converts_to_connection() {
        let err: RpcError = TransportError::new("http://127.0.0.1:4003", "refused").into();
        assert!(matches!(
            err,
            RpcError::Connection { ref endpoint, ref message }
                if endpoint == "http://127.0.0.1:4003" && message == "refused"
        ));
    }
}
