// Copyright (C) 2025 The pascal-rs Authors.
//
// models/account.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{ModelError, ModelResult};
use crate::client::fields::{
    account_field, bool_or, currency_field, encoded_key_field, i64_field, optional_account,
    optional_currency, optional_encoded_key, optional_u64, string_field, string_or_empty,
    u64_field, JsonObject,
};
use pascal_primitives::{AccountNumber, AccountState, EncodedPublicKey, PascalCurrency};
use std::str::FromStr;

/// An account as returned by `getaccount`, `getwalletaccounts` and `findaccounts`.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Account number with checksum
    pub number: AccountNumber,

    /// Encoded public key of the owner
    pub enc_pubkey: EncodedPublicKey,

    /// Current balance
    pub balance: PascalCurrency,

    /// Number of operations signed by this account
    pub n_operation: u64,

    /// Block of the last update
    pub updated_b: u64,

    pub state: AccountState,

    /// Block until which the account is locked, if any
    pub locked_until_block: Option<u64>,

    /// Sale price, only set for listed accounts
    pub price: Option<PascalCurrency>,

    /// Account receiving the sale price, only set for listed accounts
    pub seller_account: Option<AccountNumber>,

    /// Whether a listed account is reserved for one buyer
    pub private_sale: bool,

    /// Key of the reserved buyer in a private sale
    pub new_enc_pubkey: Option<EncodedPublicKey>,

    pub name: String,

    /// Application defined account type
    pub account_type: i64,

    /// The object this entity was read from
    pub raw: JsonObject,
}

impl Account {
    /// Creates from JSON
    pub fn from_json(json: &JsonObject) -> ModelResult<Self> {
        let state_text = string_field(json, "state")?;
        let state = AccountState::from_str(&state_text).map_err(|source| ModelError::Validation {
            field: "state".to_string(),
            source,
        })?;

        let (price, seller_account, private_sale, new_enc_pubkey) = match state {
            AccountState::Listed => {
                let private_sale = bool_or(json, "private_sale", false)?;
                let new_enc_pubkey = if private_sale {
                    optional_encoded_key(json, "new_enc_pubkey")?
                } else {
                    None
                };
                (
                    optional_currency(json, "price")?,
                    optional_account(json, "seller_account")?,
                    private_sale,
                    new_enc_pubkey,
                )
            }
            AccountState::Normal => (None, None, false, None),
        };

        Ok(Self {
            number: account_field(json, "account")?,
            enc_pubkey: encoded_key_field(json, "enc_pubkey")?,
            balance: currency_field(json, "balance")?,
            n_operation: u64_field(json, "n_operation")?,
            updated_b: u64_field(json, "updated_b")?,
            state,
            locked_until_block: optional_u64(json, "locked_until_block")?,
            price,
            seller_account,
            private_sale,
            new_enc_pubkey,
            name: string_or_empty(json, "name")?,
            account_type: i64_field(json, "type").or_else(|err| match err {
                ModelError::MissingField { .. } => Ok(0),
                other => Err(other),
            })?,
            raw: json.clone(),
        })
    }

    #[must_use]
    pub const fn is_listed(&self) -> bool {
        matches!(self.state, AccountState::Listed)
    }
}
