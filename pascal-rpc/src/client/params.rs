// Copyright (C) 2025 The pascal-rs Authors.
//
// client/params.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Named parameters of node calls and the argument groups shared by many
//! raw methods.

use pascal_primitives::{
    Base58PublicKey, EncodedPublicKey, HexaString, PascalCurrency, PayloadMethod,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered named parameters of one call.
///
/// Every argument is recorded, absent optionals as `null`. [`RpcParams::prepare`]
/// then drops the nulls the node rejects: key arguments (names containing
/// `enc_pubkey`, `b58_pubkey` or `b58pubkey`), `rawoperations` and
/// `protocol`. Other nulls are sent as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RpcParams(Map<String, Value>);

impl RpcParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Records `value`, or `null` when absent.
    #[must_use]
    pub fn with_opt<T: Into<Value>>(self, key: &str, value: Option<T>) -> Self {
        self.with(key, value.map_or(Value::Null, Into::into))
    }

    /// Records a key pair under the given parameter names.
    #[must_use]
    pub fn with_keys(self, enc_name: &str, b58_name: &str, keys: &KeyArgs) -> Self {
        self.with_opt(enc_name, keys.enc_pubkey.as_ref().map(|k| k.value().to_string()))
            .with_opt(b58_name, keys.b58_pubkey.as_ref().map(|k| k.value().to_string()))
    }

    /// Records `fee`, `payload`, `payload_method` and `pwd`.
    #[must_use]
    pub fn with_options(self, options: &OperationOptions) -> Self {
        self.with("fee", options.fee.to_pascal())
            .with("payload", options.payload.value())
            .with("payload_method", options.payload_method.as_str())
            .with("pwd", options.pwd.as_str())
    }

    /// Records `rawoperations` and `protocol`.
    #[must_use]
    pub fn with_raw(self, raw_operations: Option<&HexaString>, protocol: Option<u32>) -> Self {
        self.with_opt("rawoperations", raw_operations.map(HexaString::value))
            .with_opt("protocol", protocol)
    }

    /// Records the offline signing context: raw operations, protocol and
    /// `last_n_operation`.
    #[must_use]
    pub fn with_signing(self, signing: &OfflineSigning) -> Self {
        self.with_raw(signing.raw_operations.as_ref(), signing.protocol)
            .with("last_n_operation", signing.last_n_operation)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Applies the null filter and returns the object to send.
    #[must_use]
    pub fn prepare(self) -> Map<String, Value> {
        self.0
            .into_iter()
            .filter(|(key, value)| !(value.is_null() && is_droppable_when_null(key)))
            .collect()
    }
}

fn is_droppable_when_null(key: &str) -> bool {
    key.contains("enc_pubkey")
        || key.contains("b58_pubkey")
        || key.contains("b58pubkey")
        || key == "rawoperations"
        || key == "protocol"
}

/// A public key given in encoded form, base58 form, or not at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyArgs {
    pub enc_pubkey: Option<EncodedPublicKey>,
    pub b58_pubkey: Option<Base58PublicKey>,
}

impl KeyArgs {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn encoded(key: EncodedPublicKey) -> Self {
        Self {
            enc_pubkey: Some(key),
            b58_pubkey: None,
        }
    }

    #[must_use]
    pub fn base58(key: Base58PublicKey) -> Self {
        Self {
            enc_pubkey: None,
            b58_pubkey: Some(key),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enc_pubkey.is_none() && self.b58_pubkey.is_none()
    }
}

/// Fee, payload and wallet password of an operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationOptions {
    pub fee: PascalCurrency,
    pub payload: HexaString,
    pub payload_method: PayloadMethod,
    pub pwd: String,
}

impl OperationOptions {
    #[must_use]
    pub fn with_fee(fee: PascalCurrency) -> Self {
        Self {
            fee,
            ..Self::default()
        }
    }
}

/// Context of a cold wallet signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfflineSigning {
    /// Operations signed so far, appended to by the call
    pub raw_operations: Option<HexaString>,
    pub protocol: Option<u32>,
    /// `n_operation` of the signing account before this operation
    pub last_n_operation: u64,
}

/// Filter of `findaccounts`; `Default` matches every account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountFilter {
    pub name: String,
    /// `None` matches any type
    pub account_type: Option<i64>,
    /// Only accounts listed for sale
    pub listed: bool,
    /// Match `name` exactly instead of as a prefix
    pub exact: bool,
    pub min_balance: Option<PascalCurrency>,
    pub max_balance: Option<PascalCurrency>,
    pub start: u64,
    pub max: u64,
}

impl Default for AccountFilter {
    fn default() -> Self {
        Self {
            name: String::new(),
            account_type: None,
            listed: false,
            exact: true,
            min_balance: None,
            max_balance: None,
            start: 0,
            max: 100,
        }
    }
}

impl AccountFilter {
    /// A filter matching every account, paged by `offset` and `limit`.
    #[must_use]
    pub fn page(offset: u64, limit: u64) -> Self {
        Self {
            start: offset,
            max: limit,
            ..Self::default()
        }
    }

    pub(crate) fn to_params(&self) -> RpcParams {
        let balance = |b: &Option<PascalCurrency>| b.as_ref().map_or("-1".to_string(), PascalCurrency::to_pascal);
        RpcParams::new()
            .with("name", self.name.as_str())
            .with("type", self.account_type.unwrap_or(-1))
            .with("listed", self.listed)
            .with("exact", self.exact)
            .with("min_balance", balance(&self.min_balance))
            .with("max_balance", balance(&self.max_balance))
            .with("start", self.start)
            .with("max", self.max)
    }
}

/// A sender of `multioperationaddoperation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiOperationSender {
    pub account: u64,
    /// Leave `None` to let the node use the next `n_operation`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_operation: Option<u64>,
    #[serde(serialize_with = "as_pascal")]
    pub amount: PascalCurrency,
    pub payload: HexaString,
}

/// A receiver of `multioperationaddoperation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiOperationReceiver {
    pub account: u64,
    #[serde(serialize_with = "as_pascal")]
    pub amount: PascalCurrency,
    pub payload: HexaString,
}

/// An account info change of `multioperationaddoperation`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MultiOperationChange {
    pub account: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_operation: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_enc_pubkey: Option<EncodedPublicKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_b58_pubkey: Option<Base58PublicKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_type: Option<i64>,
}

/// An account and the key it signs with, for `multioperationsignoffline`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountAndKey {
    pub account: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enc_pubkey: Option<EncodedPublicKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b58_pubkey: Option<Base58PublicKey>,
}

impl AccountAndKey {
    #[must_use]
    pub fn new(account: u64, keys: KeyArgs) -> Self {
        Self {
            account,
            enc_pubkey: keys.enc_pubkey,
            b58_pubkey: keys.b58_pubkey,
        }
    }
}

fn as_pascal<S: serde::Serializer>(amount: &PascalCurrency, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&amount.to_pascal())
}
