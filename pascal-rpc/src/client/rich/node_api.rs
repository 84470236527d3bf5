// Copyright (C) 2025 The pascal-rs Authors.
//
// rich/node_api.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{map_entities, map_entity};
use crate::client::models::{Connection, Status};
use crate::client::RawApi;
use crate::RpcResult;
use pascal_config::EndPoint;

/// Node control and peer information.
#[derive(Clone, Debug)]
pub struct NodeApi {
    raw: RawApi,
}

impl NodeApi {
    #[must_use]
    pub const fn new(raw: RawApi) -> Self {
        Self { raw }
    }

    /// This facade sending to `overrides` when they are non empty.
    #[must_use]
    pub fn with_endpoints(&self, overrides: &[EndPoint]) -> Self {
        Self::new(self.raw.with_endpoints(overrides))
    }

    /// Adds peers given as `ip:port`; returns how many were added.
    pub async fn add_nodes<S: AsRef<str>>(&self, nodes: &[S]) -> RpcResult<i64> {
        self.raw.add_node(nodes).await
    }

    pub async fn start(&self) -> RpcResult<bool> {
        self.raw.start_node().await
    }

    pub async fn stop(&self) -> RpcResult<bool> {
        self.raw.stop_node().await
    }

    /// Stops then starts the node. Both calls are always made; the result is
    /// true only when both succeeded.
    pub async fn restart(&self) -> RpcResult<bool> {
        let stopped = self.stop().await?;
        let started = self.start().await?;
        Ok(stopped && started)
    }

    pub async fn connections(&self) -> RpcResult<Vec<Connection>> {
        let result = self.raw.get_connections().await?;
        map_entities(&result, "getconnections", Connection::from_json)
    }

    pub async fn status(&self) -> RpcResult<Status> {
        let result = self.raw.node_status().await?;
        map_entity(&result, "nodestatus", Status::from_json)
    }
}
