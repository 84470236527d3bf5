// Copyright (C) 2025 The pascal-rs Authors.
//
// models/operation_parts.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Participants of an operation: senders, receivers and account changers.

use super::ModelResult;
use crate::client::fields::{
    account_field, currency_field, hex_or_empty, optional_account, optional_currency,
    optional_encoded_key, optional_i64, optional_string, optional_u64, u64_field, u64_or,
    JsonObject,
};
use pascal_primitives::{AccountNumber, EncodedPublicKey, HexaString, PascalCurrency};

/// An account paying into an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Sender {
    pub account: AccountNumber,
    pub n_operation: u64,
    /// Amount sent, negative as reported by the node
    pub amount: PascalCurrency,
    pub payload: HexaString,
    pub raw: JsonObject,
}

impl Sender {
    pub fn from_json(json: &JsonObject) -> ModelResult<Self> {
        Ok(Self {
            account: account_field(json, "account")?,
            n_operation: u64_field(json, "n_operation")?,
            amount: currency_field(json, "amount")?,
            payload: hex_or_empty(json, "payload")?,
            raw: json.clone(),
        })
    }
}

/// An account credited by an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Receiver {
    pub account: AccountNumber,
    pub amount: PascalCurrency,
    pub payload: HexaString,
    pub raw: JsonObject,
}

impl Receiver {
    pub fn from_json(json: &JsonObject) -> ModelResult<Self> {
        Ok(Self {
            account: account_field(json, "account")?,
            amount: currency_field(json, "amount")?,
            payload: hex_or_empty(json, "payload")?,
            raw: json.clone(),
        })
    }
}

/// An account whose info an operation changes.
///
/// Only the changed attributes are present.
#[derive(Debug, Clone, PartialEq)]
pub struct Changer {
    pub account: AccountNumber,
    /// Defaults to 0 when the node omits it
    pub n_operation: u64,
    pub new_enc_pubkey: Option<EncodedPublicKey>,
    pub new_name: Option<String>,
    pub new_type: Option<i64>,
    pub seller_account: Option<AccountNumber>,
    pub account_price: Option<PascalCurrency>,
    pub locked_until_block: Option<u64>,
    pub fee: Option<PascalCurrency>,
    pub raw: JsonObject,
}

impl Changer {
    pub fn from_json(json: &JsonObject) -> ModelResult<Self> {
        Ok(Self {
            account: account_field(json, "account")?,
            n_operation: u64_or(json, "n_operation", 0)?,
            new_enc_pubkey: optional_encoded_key(json, "new_enc_pubkey")?,
            new_name: optional_string(json, "new_name")?,
            new_type: optional_i64(json, "new_type")?,
            seller_account: optional_account(json, "seller_account")?,
            account_price: optional_currency(json, "account_price")?,
            locked_until_block: optional_u64(json, "locked_until_block")?,
            fee: optional_currency(json, "fee")?,
            raw: json.clone(),
        })
    }
}
