// Copyright (C) 2025 The pascal-rs Authors.
//
// models/status.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Node status as returned by `nodestatus`.

use super::ModelResult;
use crate::client::fields::{
    as_object, block_field, bool_or, hex_or_empty, list_field, required, string_or_empty,
    u16_field, u32_field, u64_field, u64_or, JsonObject,
};
use pascal_primitives::{BlockNumber, HexaString};

#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub ready: bool,
    /// Readiness description
    pub ready_text: String,
    /// Port the node listens on for peers
    pub port: u16,
    /// Whether the wallet is locked
    pub locked: bool,
    pub timestamp: u64,
    pub version: String,
    pub net_protocol_ver: u32,
    pub net_protocol_ver_a: u32,
    /// Current block height
    pub blocks: BlockNumber,
    pub sbh: HexaString,
    pub pow: HexaString,
    pub openssl: String,
    pub net_stats: NetStats,
    pub node_servers: Vec<NodeServer>,
    pub raw: JsonObject,
}

impl Status {
    pub fn from_json(json: &JsonObject) -> ModelResult<Self> {
        let protocol = as_object(required(json, "netprotocol")?, "netprotocol")?;
        Ok(Self {
            ready: bool_or(json, "ready", false)?,
            ready_text: string_or_empty(json, "ready_s")?,
            port: u16_field(json, "port")?,
            locked: bool_or(json, "locked", false)?,
            timestamp: u64_field(json, "timestamp")?,
            version: string_or_empty(json, "version")?,
            net_protocol_ver: u32_field(protocol, "ver")?,
            net_protocol_ver_a: u32_field(protocol, "ver_a")?,
            blocks: block_field(json, "blocks")?,
            sbh: hex_or_empty(json, "sbh")?,
            pow: hex_or_empty(json, "pow")?,
            openssl: string_or_empty(json, "openssl")?,
            net_stats: NetStats::from_json(as_object(required(json, "netstats")?, "netstats")?)?,
            node_servers: list_field(json, "nodeservers", NodeServer::from_json)?,
            raw: json.clone(),
        })
    }
}

/// Traffic counters of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetStats {
    pub active: u64,
    pub clients: u64,
    pub servers: u64,
    pub servers_t: u64,
    pub total: u64,
    pub tclients: u64,
    pub tservers: u64,
    /// Bytes received
    pub breceived: u64,
    /// Bytes sent
    pub bsend: u64,
}

impl NetStats {
    pub fn from_json(json: &JsonObject) -> ModelResult<Self> {
        Ok(Self {
            active: u64_or(json, "active", 0)?,
            clients: u64_or(json, "clients", 0)?,
            servers: u64_or(json, "servers", 0)?,
            servers_t: u64_or(json, "servers_t", 0)?,
            total: u64_or(json, "total", 0)?,
            tclients: u64_or(json, "tclients", 0)?,
            tservers: u64_or(json, "tservers", 0)?,
            breceived: u64_or(json, "breceived", 0)?,
            bsend: u64_or(json, "bsend", 0)?,
        })
    }
}

/// A known peer server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeServer {
    pub ip: String,
    pub port: u16,
    /// Unix time of the last connection
    pub last_connection: u64,
    pub attempts: u64,
}

impl NodeServer {
    pub fn from_json(json: &JsonObject) -> ModelResult<Self> {
        Ok(Self {
            ip: string_or_empty(json, "ip")?,
            port: u16_field(json, "port")?,
            last_connection: u64_or(json, "lastcon", 0)?,
            attempts: u64_or(json, "attempts", 0)?,
        })
    }
}
