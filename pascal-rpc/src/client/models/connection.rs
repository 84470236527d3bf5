// Copyright (C) 2025 The pascal-rs Authors.
//
// models/connection.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::ModelResult;
use crate::client::fields::{
    bool_or, i64_field, string_field, string_or_empty, u16_field, u32_field, u64_field, u64_or,
    JsonObject,
};

/// A peer connection as returned by `getconnections`.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// True when the peer connected to us
    pub server: bool,
    pub ip: String,
    pub port: u16,
    /// Seconds since the connection was opened
    pub secs: u64,
    /// Bytes sent
    pub sent: u64,
    /// Bytes received
    pub recv: u64,
    /// Peer application version
    pub app_ver: String,
    pub net_ver: u32,
    pub net_ver_a: u32,
    /// Clock difference to the peer in seconds
    pub time_diff: i64,
    pub raw: JsonObject,
}

impl Connection {
    pub fn from_json(json: &JsonObject) -> ModelResult<Self> {
        Ok(Self {
            server: bool_or(json, "server", false)?,
            ip: string_field(json, "ip")?,
            port: u16_field(json, "port")?,
            secs: u64_or(json, "secs", 0)?,
            sent: u64_field(json, "sent")?,
            recv: u64_field(json, "recv")?,
            app_ver: string_or_empty(json, "appver")?,
            net_ver: u32_field(json, "netver")?,
            net_ver_a: u32_field(json, "netver_a")?,
            time_diff: i64_field(json, "timediff")?,
            raw: json.clone(),
        })
    }
}
