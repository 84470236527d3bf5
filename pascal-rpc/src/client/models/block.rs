// Copyright (C) 2025 The pascal-rs Authors.
//
// models/block.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{ModelError, ModelResult};
use crate::client::fields::{
    block_field, currency_field, encoded_key_field, hex_field, string_or_empty, u32_field,
    u64_field, u64_or, JsonObject,
};
use pascal_primitives::{AccountNumber, BlockNumber, EncodedPublicKey, HexaString, PascalCurrency};

/// Accounts created by every block.
pub const ACCOUNTS_PER_BLOCK: u64 = 5;

/// A block as returned by `getblock` and `getblocks`.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub number: BlockNumber,

    /// Encoded public key of the miner
    pub enc_pubkey: EncodedPublicKey,

    pub reward: PascalCurrency,
    pub fee: PascalCurrency,

    /// Protocol version
    pub ver: u32,

    /// Miner protocol version
    pub ver_a: u32,

    /// Unix timestamp
    pub timestamp: u64,

    /// Compact proof-of-work target
    pub target: u64,

    pub nonce: u64,

    /// Miner payload text
    pub payload: String,

    /// Safe box hash
    pub sbh: HexaString,

    /// Operations hash
    pub oph: HexaString,

    /// Proof of work
    pub pow: HexaString,

    /// Number of operations in the block
    pub operations: u64,

    /// Network hash rate at this block, in kh/s
    pub hashratekhs: u64,

    /// Blocks mined on top of this one
    pub maturation: u64,

    /// The five accounts this block created, reward account first
    pub accounts: [AccountNumber; ACCOUNTS_PER_BLOCK as usize],

    /// The object this entity was read from
    pub raw: JsonObject,
}

impl Block {
    /// Creates from JSON
    pub fn from_json(json: &JsonObject) -> ModelResult<Self> {
        let number = block_field(json, "block")?;
        Ok(Self {
            accounts: Self::created_accounts(number)?,
            number,
            enc_pubkey: encoded_key_field(json, "enc_pubkey")?,
            reward: currency_field(json, "reward")?,
            fee: currency_field(json, "fee")?,
            ver: u32_field(json, "ver")?,
            ver_a: u32_field(json, "ver_a")?,
            timestamp: u64_field(json, "timestamp")?,
            target: u64_field(json, "target")?,
            nonce: u64_field(json, "nonce")?,
            payload: string_or_empty(json, "payload")?,
            sbh: hex_field(json, "sbh")?,
            oph: hex_field(json, "oph")?,
            pow: hex_field(json, "pow")?,
            operations: u64_or(json, "operations", 0)?,
            hashratekhs: u64_or(json, "hashratekhs", 0)?,
            maturation: u64_or(json, "maturation", 0)?,
            raw: json.clone(),
        })
    }

    /// Accounts `block * 5 .. block * 5 + 4`.
    fn created_accounts(
        number: BlockNumber,
    ) -> ModelResult<[AccountNumber; ACCOUNTS_PER_BLOCK as usize]> {
        let first = number
            .value()
            .checked_mul(ACCOUNTS_PER_BLOCK)
            .filter(|first| first.checked_add(ACCOUNTS_PER_BLOCK - 1).is_some())
            .ok_or_else(|| ModelError::invalid("block", "block number out of range"))?;
        Ok(std::array::from_fn(|i| AccountNumber::new(first + i as u64)))
    }

    /// The account that received the block reward.
    #[must_use]
    pub const fn reward_account(&self) -> AccountNumber {
        self.accounts[0]
    }
}
