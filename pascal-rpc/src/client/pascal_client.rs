// Copyright (C) 2025 The pascal-rs Authors.
//
// client/pascal_client.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::rich::RichApi;
use super::{EndpointSelector, HttpTransport, RawApi, RpcDispatcher, Transport};
use crate::RpcResult;
use pascal_config::{ClientConfig, EndPoint};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Entry point of the library.
///
/// Holds the configured endpoints and the transport. [`PascalClient::raw_api`]
/// and [`PascalClient::rich_api`] accept endpoint overrides; an empty slice
/// means "use the configured endpoints".
#[derive(Clone, Debug)]
pub struct PascalClient {
    dispatcher: RpcDispatcher,
}

impl PascalClient {
    /// Creates a client posting over HTTP to the endpoints of `config`.
    ///
    /// # Errors
    ///
    /// Returns `RpcError::Config` when `config` has no endpoint and
    /// `RpcError::HttpClient` when the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> RpcResult<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config.request_timeout())?;
        debug!(
            target: "pascal_rpc",
            endpoints = config.endpoints.len(),
            timeout_ms = config.request_timeout_ms,
            "client created"
        );
        Ok(Self::with_transport(Arc::new(transport), config.endpoints.clone()))
    }

    /// Loads a TOML configuration file and creates the client.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::load`] and [`PascalClient::new`].
    pub fn from_config_file(path: impl AsRef<Path>) -> RpcResult<Self> {
        Self::new(&ClientConfig::load(path)?)
    }

    /// Creates a client over any transport. The endpoint list may be empty,
    /// calls then need overrides.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>, endpoints: Vec<EndPoint>) -> Self {
        Self {
            dispatcher: RpcDispatcher::new(transport, EndpointSelector::new(endpoints)),
        }
    }

    /// The configured endpoints.
    #[must_use]
    pub fn endpoints(&self) -> &[EndPoint] {
        self.dispatcher.endpoints().endpoints()
    }

    #[must_use]
    pub fn raw_api(&self, overrides: &[EndPoint]) -> RawApi {
        RawApi::new(self.dispatcher.with_endpoints(overrides))
    }

    #[must_use]
    pub fn rich_api(&self, overrides: &[EndPoint]) -> RichApi {
        RichApi::new(&self.raw_api(overrides))
    }
}
