// Copyright (C) 2025 The pascal-rs Authors.
//
// client/dispatcher.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::models::{RpcRequest, RpcResponse};
use super::params::RpcParams;
use super::{EndpointSelector, Transport};
use crate::RpcResult;
use pascal_config::EndPoint;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace, warn};

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// Returns the next process wide request id, starting at 1.
pub fn next_request_id() -> u64 {
    NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed)
}

/// Builds request envelopes, sends them through the transport and unwraps
/// the responses.
#[derive(Clone)]
pub struct RpcDispatcher {
    transport: Arc<dyn Transport>,
    endpoints: EndpointSelector,
}

impl std::fmt::Debug for RpcDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcDispatcher")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

impl RpcDispatcher {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, endpoints: EndpointSelector) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// A dispatcher sharing this transport but sending to `overrides` when
    /// they are non empty.
    #[must_use]
    pub fn with_endpoints(&self, overrides: &[EndPoint]) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoints: self.endpoints.or_overrides(overrides),
        }
    }

    #[must_use]
    pub fn endpoints(&self) -> &EndpointSelector {
        &self.endpoints
    }

    /// Sends `method` with a fresh request id.
    ///
    /// # Errors
    ///
    /// Fails with `RpcError::NoEndPoint` when no endpoint is available,
    /// `RpcError::Connection` when the node cannot be reached, `RpcError::Rpc`
    /// when the node reports an error and `RpcError::InvalidResponse` when
    /// the body is not a usable response.
    pub async fn send(&self, method: &str, params: RpcParams) -> RpcResult<Value> {
        self.send_with_id(method, params, next_request_id()).await
    }

    /// Sends `method` with a caller chosen request id.
    ///
    /// # Errors
    ///
    /// See [`RpcDispatcher::send`].
    pub async fn send_with_id(&self, method: &str, params: RpcParams, id: u64) -> RpcResult<Value> {
        let endpoint = self.endpoints.select()?;
        let request = RpcRequest::new(id, method, params.prepare());
        debug!(target: "pascal_rpc", method, id, endpoint = %endpoint, "sending request");

        let start = Instant::now();
        let body = self.transport.request(&request, endpoint).await?;
        trace!(
            target: "pascal_rpc",
            method,
            id,
            elapsed_ms = start.elapsed().as_millis() as u64,
            body = %body,
            "response body"
        );

        RpcResponse::parse(&body)?.into_result().map_err(|err| {
            warn!(target: "pascal_rpc", method, id, error = %err, "request failed");
            err
        })
    }
}
