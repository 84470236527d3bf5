// Copyright (C) 2025 The pascal-rs Authors.
//
// models/public_key.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{ModelError, ModelResult};
use crate::client::fields::{
    bool_or, encoded_key_field, hex_field, i64_field, optional_string, string_field, JsonObject,
};
use pascal_primitives::{Base58PublicKey, EcCurve, EncodedPublicKey, HexaString};

/// A wallet public key as returned by `getwalletpubkeys`, `getwalletpubkey`
/// and `decodepubkey`.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicKey {
    /// Wallet label, absent for decoded keys
    pub name: Option<String>,

    /// Whether the wallet holds the private key
    pub can_use: bool,

    pub b58_pubkey: Base58PublicKey,
    pub enc_pubkey: EncodedPublicKey,
    pub ec_nid: EcCurve,
    pub x: HexaString,
    pub y: HexaString,
    pub raw: JsonObject,
}

impl PublicKey {
    /// Creates from JSON
    pub fn from_json(json: &JsonObject) -> ModelResult<Self> {
        let ec_nid = EcCurve::try_from(i64_field(json, "ec_nid")?).map_err(|source| {
            ModelError::Validation {
                field: "ec_nid".to_string(),
                source,
            }
        })?;

        Ok(Self {
            name: optional_string(json, "name")?,
            can_use: bool_or(json, "can_use", false)?,
            b58_pubkey: Base58PublicKey::new(string_field(json, "b58_pubkey")?),
            enc_pubkey: encoded_key_field(json, "enc_pubkey")?,
            ec_nid,
            x: hex_field(json, "x")?,
            y: hex_field(json, "y")?,
            raw: json.clone(),
        })
    }
}
