// Copyright (C) 2025 The pascal-rs Authors.
//
// rich/account_api.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{map_entities, map_entity, AccountRef};
use crate::client::models::Account;
use crate::client::params::AccountFilter;
use crate::client::RawApi;
use crate::RpcResult;
use pascal_config::EndPoint;

/// Account lookup.
#[derive(Clone, Debug)]
pub struct AccountApi {
    raw: RawApi,
}

impl AccountApi {
    #[must_use]
    pub const fn new(raw: RawApi) -> Self {
        Self { raw }
    }

    #[must_use]
    pub fn with_endpoints(&self, overrides: &[EndPoint]) -> Self {
        Self::new(self.raw.with_endpoints(overrides))
    }

    /// Fetches the current state of an account.
    ///
    /// Passing an [`Account`] refreshes it.
    pub async fn find<'a>(&self, account: impl Into<AccountRef<'a>>) -> RpcResult<Account> {
        let id = account.into().id();
        let result = self.raw.get_account(id).await?;
        map_entity(&result, "getaccount", Account::from_json)
    }

    /// A page of all accounts, `limit` accounts from `offset`.
    pub async fn paged(&self, limit: u64, offset: u64) -> RpcResult<Vec<Account>> {
        self.search(&AccountFilter::page(offset, limit)).await
    }

    /// Accounts matching `filter`.
    pub async fn search(&self, filter: &AccountFilter) -> RpcResult<Vec<Account>> {
        let result = self.raw.find_accounts(filter).await?;
        map_entities(&result, "findaccounts", Account::from_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixture::FixtureTransport;
    use crate::RpcError;
    use pascal_primitives::AccountNumber;
    use serde_json::{json, Value};

    fn account_json(id: u64) -> Value {
        json!({
            "account": id,
            "enc_pubkey": "CA02",
            "balance": 1,
            "n_operation": 0,
            "updated_b": 10,
            "state": "normal",
            "name": "",
            "type": 0
        })
    }

    fn accounts(transport: &FixtureTransport) -> AccountApi {
        AccountApi::new(RawApi::new(transport.dispatcher()))
    }

    #[tokio::test]
    async fn find_accepts_every_account_form() {
        let transport = FixtureTransport::new().respond("getaccount", account_json(77));
        let api = accounts(&transport);

        let by_id = api.find(77_u64).await.unwrap();
        let by_number = api.find(AccountNumber::new(77)).await.unwrap();
        let refreshed = api.find(&by_id).await.unwrap();

        assert_eq!(by_id.number.to_string(), "77-44");
        assert_eq!(by_number, by_id);
        assert_eq!(refreshed, by_id);
        for request in transport.requests() {
            assert_eq!(Value::Object(request.params), json!({"account": 77}));
        }
    }

    #[tokio::test]
    async fn unknown_account_is_a_known_node_error() {
        let transport = FixtureTransport::new().fail("getaccount", 1002, "Account not found");
        let err = accounts(&transport).find(999_999_u64).await.unwrap_err();
        assert!(matches!(err, RpcError::Rpc { code: 1002, .. }));
        assert!(err.is_known_error());
    }

    #[tokio::test]
    async fn paged_uses_neutral_filter() {
        let transport = FixtureTransport::new()
            .respond("findaccounts", json!([account_json(20), account_json(21)]));
        let page = accounts(&transport).paged(2, 20).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[1].number.account(), 21);
        assert_eq!(
            transport.last_params(),
            json!({
                "name": "", "type": -1, "listed": false, "exact": true,
                "min_balance": "-1", "max_balance": "-1", "start": 20, "max": 2
            })
        );
    }
}
