// Copyright (C) 2025 The pascal-rs Authors.
//
// client/transport.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::models::RpcRequest;
use async_trait::async_trait;
use pascal_config::EndPoint;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::trace;

/// Failure to deliver a request or read its response body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("request to {endpoint} failed: {message}")]
pub struct TransportError {
    /// Endpoint the request was sent to.
    pub endpoint: String,
    /// Underlying error message.
    pub message: String,
}

impl TransportError {
    pub fn new(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}

/// Delivers a JSON-RPC request to one endpoint and returns the raw body.
///
/// Implementations must not interpret the body; error objects are handled by
/// the dispatcher.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        request: &RpcRequest,
        endpoint: &EndPoint,
    ) -> Result<String, TransportError>;
}

/// HTTP transport backed by `reqwest`.
///
/// Requests are POSTed as JSON to the endpoint URL. The body is returned for
/// any HTTP status since nodes report failures inside the JSON payload.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Builds a transport whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self { http_client })
    }

    /// Wraps an existing HTTP client.
    #[must_use]
    pub const fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        request: &RpcRequest,
        endpoint: &EndPoint,
    ) -> Result<String, TransportError> {
        let failed = |e: reqwest::Error| TransportError::new(endpoint.to_string(), e.to_string());

        let response = self
            .http_client
            .post(endpoint.url().clone())
            .json(request)
            .send()
            .await
            .map_err(failed)?;

        trace!(
            target: "pascal_rpc::transport",
            status = %response.status(),
            endpoint = %endpoint,
            "response received"
        );

        response.text().await.map_err(failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::params::RpcParams;
    use mockito::{Matcher, Server};
    use pascal_config::{EndPoint, Scheme};
    use std::net::TcpListener;

    fn localhost_binding_permitted() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn endpoint_for(server: &Server) -> EndPoint {
        let address = server.host_with_port();
        let (host, port) = address.rsplit_once(':').expect("host:port");
        EndPoint::new(host, port.parse().expect("port"), Scheme::Http).expect("endpoint")
    }

    #[tokio::test]
    async fn posts_json_envelope_and_returns_body() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let body = r#"{"jsonrpc":"2.0","id":7,"result":12345}"#;
        let _m = server
            .mock("POST", "/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Regex(
                r#""id"\s*:\s*7.*"jsonrpc"\s*:\s*"2.0".*"method"\s*:\s*"getblockcount""#
                    .to_string(),
            ))
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let transport = HttpTransport::new(Duration::from_secs(5)).expect("transport");
        let request = RpcRequest::new(7, "getblockcount", RpcParams::new().prepare());
        let text = transport
            .request(&request, &endpoint_for(&server))
            .await
            .expect("body");
        assert_eq!(text, body);
    }

    #[tokio::test]
    async fn non_success_status_still_returns_body() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":100,"message":"boom"}}"#;
        let _m = server
            .mock("POST", "/")
            .with_status(500)
            .with_body(body)
            .create_async()
            .await;

        let transport = HttpTransport::new(Duration::from_secs(5)).expect("transport");
        let request = RpcRequest::new(1, "nodestatus", RpcParams::new().prepare());
        let text = transport
            .request(&request, &endpoint_for(&server))
            .await
            .expect("body");
        assert_eq!(text, body);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        if !localhost_binding_permitted() {
            return;
        }
        // Bind then drop to get a port with nothing listening.
        let port = TcpListener::bind("127.0.0.1:0")
            .expect("bind")
            .local_addr()
            .expect("addr")
            .port();
        let endpoint = EndPoint::new("127.0.0.1", port, Scheme::Http).expect("endpoint");

        let transport = HttpTransport::new(Duration::from_secs(2)).expect("transport");
        let request = RpcRequest::new(1, "nodestatus", RpcParams::new().prepare());
        let err = transport
            .request(&request, &endpoint)
            .await
            .expect_err("nothing listens on the port");
        assert_eq!(err.endpoint, endpoint.to_string());
        assert!(!err.message.is_empty());
    }
}
