// Copyright (C) 2025 The pascal-rs Authors.
//
// rich/wallet_api.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{map_entities, map_entity, KeyRef};
use crate::client::fields::value_to_text;
use crate::client::models::{Account, PublicKey};
use crate::client::params::KeyArgs;
use crate::client::RawApi;
use crate::{RpcError, RpcResult};
use pascal_config::EndPoint;
use pascal_primitives::PascalCurrency;

/// Wallet accounts, keys and balance.
#[derive(Clone, Debug)]
pub struct WalletApi {
    raw: RawApi,
}

impl WalletApi {
    #[must_use]
    pub const fn new(raw: RawApi) -> Self {
        Self { raw }
    }

    #[must_use]
    pub fn with_endpoints(&self, overrides: &[EndPoint]) -> Self {
        Self::new(self.raw.with_endpoints(overrides))
    }

    /// Wallet accounts, optionally only those owned by `key`.
    pub async fn list_accounts(
        &self,
        key: Option<KeyRef<'_>>,
        start: u64,
        max: u64,
    ) -> RpcResult<Vec<Account>> {
        let result = self
            .raw
            .get_wallet_accounts(&key_args(key), start, max)
            .await?;
        map_entities(&result, "getwalletaccounts", Account::from_json)
    }

    pub async fn count_accounts(
        &self,
        key: Option<KeyRef<'_>>,
        start: u64,
        max: u64,
    ) -> RpcResult<u64> {
        self.raw
            .get_wallet_accounts_count(&key_args(key), start, max)
            .await
    }

    pub async fn list_public_keys(&self, start: u64, max: u64) -> RpcResult<Vec<PublicKey>> {
        let result = self.raw.get_wallet_pub_keys(start, max).await?;
        map_entities(&result, "getwalletpubkeys", PublicKey::from_json)
    }

    pub async fn find_public_key(&self, key: KeyRef<'_>) -> RpcResult<PublicKey> {
        let result = self.raw.get_wallet_pub_key(&key.to_key_args()).await?;
        map_entity(&result, "getwalletpubkey", PublicKey::from_json)
    }

    /// Total balance of the wallet, or of the accounts of `key`.
    pub async fn balance(&self, key: Option<KeyRef<'_>>) -> RpcResult<PascalCurrency> {
        let result = self.raw.get_wallet_coins(&key_args(key)).await?;
        let text = value_to_text(&result)
            .ok_or_else(|| RpcError::invalid_response("getwalletcoins: expected amount"))?;
        Ok(PascalCurrency::parse(&text)?)
    }
}

fn key_args(key: Option<KeyRef<'_>>) -> KeyArgs {
    key.map_or_else(KeyArgs::none, |key| key.to_key_args())
}
