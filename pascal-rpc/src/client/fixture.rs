// Copyright (C) 2025 The pascal-rs Authors.
//
// client/fixture.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Canned transport for unit tests.

use super::models::RpcRequest;
use super::{EndpointSelector, RpcDispatcher, Transport, TransportError};
use async_trait::async_trait;
use pascal_config::EndPoint;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Answers each method with a fixed body and records every request.
///
/// Methods with no canned answer fail like an unreachable node. A method can
/// be given several pages, which are served in order and then repeat the last.
#[derive(Clone, Default)]
pub(crate) struct FixtureTransport {
    bodies: Arc<Mutex<HashMap<String, Vec<String>>>>,
    log: Arc<Mutex<Vec<(RpcRequest, String)>>>,
}

impl FixtureTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, method: &str, result: Value) -> Self {
        self.respond_body(method, json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string())
    }

    pub(crate) fn fail(self, method: &str, code: i64, message: &str) -> Self {
        self.respond_body(
            method,
            json!({"jsonrpc": "2.0", "id": 1, "error": {"code": code, "message": message}})
                .to_string(),
        )
    }

    pub(crate) fn respond_body(self, method: &str, body: String) -> Self {
        self.bodies
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push(body);
        self
    }

    pub(crate) fn shared(&self) -> Arc<dyn Transport> {
        Arc::new(self.clone())
    }

    /// A dispatcher sending to `127.0.0.1:4003` through this transport.
    pub(crate) fn dispatcher(&self) -> RpcDispatcher {
        let endpoint = EndPoint::with_host("127.0.0.1").unwrap();
        RpcDispatcher::new(self.shared(), EndpointSelector::new(vec![endpoint]))
    }

    pub(crate) fn requests(&self) -> Vec<RpcRequest> {
        self.log.lock().unwrap().iter().map(|(r, _)| r.clone()).collect()
    }

    pub(crate) fn last_request(&self) -> Option<RpcRequest> {
        self.requests().pop()
    }

    /// Params of the last request as a JSON object.
    pub(crate) fn last_params(&self) -> Value {
        self.last_request()
            .map(|r| Value::Object(r.params))
            .unwrap_or(Value::Null)
    }

    pub(crate) fn methods(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.method).collect()
    }

    pub(crate) fn endpoint_hosts(&self) -> Vec<String> {
        self.log.lock().unwrap().iter().map(|(_, host)| host.clone()).collect()
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn request(
        &self,
        request: &RpcRequest,
        endpoint: &EndPoint,
    ) -> Result<String, TransportError> {
        self.log
            .lock()
            .unwrap()
            .push((request.clone(), endpoint.host().to_string()));

        let mut bodies = self.bodies.lock().unwrap();
        let pages = bodies
            .get_mut(&request.method)
            .filter(|pages| !pages.is_empty())
            .ok_or_else(|| TransportError::new(endpoint.to_string(), "connection refused"))?;
        if pages.len() > 1 {
            Ok(pages.remove(0))
        } else {
            Ok(pages[0].clone())
        }
    }
}
