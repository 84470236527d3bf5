// Copyright (C) 2025 The pascal-rs Authors.
//
// models/rpc_response.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::client::fields::{present, value_to_i64, value_to_text, JsonObject};
use crate::{RpcError, RpcResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope returned by a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Response ID
    pub id: Value,

    /// JSON-RPC version
    #[serde(rename = "jsonrpc", skip_serializing_if = "Option::is_none")]
    pub json_rpc: Option<String>,

    /// Error if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcResponseError>,

    /// Result if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl RpcResponse {
    /// Reads the envelope; a null `error` counts as no error.
    #[must_use]
    pub fn from_json(json: &JsonObject) -> Self {
        let error = present(json, "error").map(|error| RpcResponseError::from_json(error, json));
        Self {
            id: json.get("id").cloned().unwrap_or(Value::Null),
            json_rpc: json.get("jsonrpc").and_then(Value::as_str).map(str::to_string),
            error,
            result: json.get("result").cloned(),
        }
    }

    /// Parses a raw response body.
    ///
    /// # Errors
    ///
    /// Returns `RpcError::InvalidResponse` if the body is not a JSON object.
    pub fn parse(body: &str) -> RpcResult<Self> {
        let json: Value = serde_json::from_str(body)
            .map_err(|e| RpcError::invalid_response(format!("Parse error: {e}")))?;
        let obj = json
            .as_object()
            .ok_or_else(|| RpcError::invalid_response("Invalid response format"))?;
        Ok(Self::from_json(obj))
    }

    /// Unwraps the `result` member.
    ///
    /// # Errors
    ///
    /// Returns `RpcError::Rpc` when the node reported an error and
    /// `RpcError::InvalidResponse` when neither `error` nor `result` is present.
    pub fn into_result(self) -> RpcResult<Value> {
        if let Some(error) = self.error {
            return Err(error.into());
        }
        self.result
            .ok_or_else(|| RpcError::invalid_response("No result returned"))
    }
}

/// Error object of a failed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponseError {
    /// Error code
    pub code: i64,

    /// Error message
    pub message: String,

    /// Additional data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcResponseError {
    /// Reads the `error` member.
    ///
    /// Code and message are taken from the error object, falling back to
    /// top-level `code`/`message` members and finally to code 0. A plain
    /// string error is used as the message.
    #[must_use]
    pub fn from_json(error: &Value, envelope: &JsonObject) -> Self {
        let member = |name: &str| {
            error
                .as_object()
                .and_then(|obj| present(obj, name))
                .or_else(|| present(envelope, name))
        };

        let code = member("code").and_then(value_to_i64).unwrap_or(0);
        let message = match error {
            Value::String(text) => text.clone(),
            _ => member("message").and_then(value_to_text).unwrap_or_default(),
        };
        let data = error.as_object().and_then(|obj| present(obj, "data")).cloned();

        Self {
            code,
            message,
            data,
        }
    }
}

impl From<RpcResponseError> for RpcError {
    fn from(error: RpcResponseError) -> Self {
        Self::rpc(error.code, error.message, error.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RpcErrorCode;

    #[test]
    fn result_is_unwrapped() {
        let response = RpcResponse::parse(r#"{"jsonrpc":"2.0","id":1,"result":12345}"#).unwrap();
        assert_eq!(response.into_result().unwrap(), Value::from(12345));
    }

    #[test]
    fn error_object_becomes_node_error() {
        let response = RpcResponse::parse(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":1002,"message":"Invalid account"}}"#,
        )
        .unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err.error_code(), Some(RpcErrorCode::InvalidAccount));
        assert!(err.is_known_error());
        assert!(err.to_string().contains("Invalid account"));
    }

    #[test]
    fn unknown_error_code_is_preserved() {
        let err = RpcResponse::parse(r#"{"id":1,"error":{"code":9999,"message":"odd"}}"#)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert!(matches!(err, RpcError::Rpc { code: 9999, .. }));
        assert!(!err.is_known_error());
    }

    #[test]
    fn top_level_code_is_a_fallback() {
        let err = RpcResponse::parse(r#"{"id":1,"code":1010,"message":"Not found","error":"Not found"}"#)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert!(matches!(
            err,
            RpcError::Rpc { code: 1010, ref message, .. } if message == "Not found"
        ));
    }

    #[test]
    fn null_error_is_ignored() {
        let response = RpcResponse::parse(r#"{"id":1,"error":null,"result":true}"#).unwrap();
        assert!(response.error.is_none());
        assert_eq!(response.into_result().unwrap(), Value::Bool(true));
    }

    #[test]
    fn missing_result_is_invalid() {
        let err = RpcResponse::parse(r#"{"id":1,"jsonrpc":"2.0"}"#)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert!(matches!(err, RpcError::InvalidResponse { .. }));
    }

    #[test]
    fn non_object_bodies_are_invalid() {
        assert!(matches!(
            RpcResponse::parse("[1,2]"),
            Err(RpcError::InvalidResponse { .. })
        ));
        assert!(matches!(
            RpcResponse::parse("<html>"),
            Err(RpcError::InvalidResponse { .. })
        ));
    }
}
