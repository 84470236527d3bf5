//! # Pascal Config
//!
//! Configuration for the PascalCoin RPC client: the node endpoints to talk to
//! and the client settings loaded from TOML.

pub mod client;
pub mod endpoint;
pub mod error;

pub use client::{ClientConfig, DEFAULT_REQUEST_TIMEOUT_MS};
pub use endpoint::{EndPoint, Scheme, DEFAULT_RPC_PORT};
pub use error::{ConfigError, ConfigResult};
