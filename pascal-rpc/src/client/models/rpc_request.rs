// Copyright (C) 2025 The pascal-rs Authors.
//
// models/rpc_request.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON-RPC 2.0 protocol version sent with every request.
pub const JSON_RPC_VERSION: &str = "2.0";

/// Request envelope posted to a node.
///
/// `params` is always a named-parameter object, never positional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Request id, echoed back by the node.
    pub id: u64,

    /// JSON-RPC version
    #[serde(rename = "jsonrpc")]
    pub json_rpc: String,

    /// Method name
    pub method: String,

    /// Named parameters
    pub params: Map<String, Value>,
}

impl RpcRequest {
    #[must_use]
    pub fn new(id: u64, method: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            id,
            json_rpc: JSON_RPC_VERSION.to_string(),
            method: method.into(),
            params,
        }
    }

    /// Converts to JSON
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut json = Map::new();
        json.insert("id".to_string(), Value::from(self.id));
        json.insert("jsonrpc".to_string(), Value::from(self.json_rpc.clone()));
        json.insert("method".to_string(), Value::from(self.method.clone()));
        json.insert("params".to_string(), Value::Object(self.params.clone()));
        Value::Object(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_has_the_four_members() {
        let mut params = Map::new();
        params.insert("account".to_string(), json!(5));
        let request = RpcRequest::new(3, "getaccount", params);

        let expected = json!({
            "id": 3,
            "jsonrpc": "2.0",
            "method": "getaccount",
            "params": {"account": 5}
        });
        assert_eq!(request.to_json(), expected);
        assert_eq!(serde_json::to_value(&request).unwrap(), expected);
    }

    #[test]
    fn empty_params_serialize_as_object() {
        let request = RpcRequest::new(1, "getblockcount", Map::new());
        let text = serde_json::to_string(&request).unwrap();
        assert!(text.contains(r#""params":{}"#));
    }
}
