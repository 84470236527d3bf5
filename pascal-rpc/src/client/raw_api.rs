// Copyright (C) 2025 The pascal-rs Authors.
//
// client/raw_api.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! One async method per node RPC method.
//!
//! Arguments are sent under the node's parameter names. Counts and flags are
//! converted to Rust scalars, every other result is returned as JSON for the
//! rich API (or the caller) to map.

use super::fields::{value_to_bool, value_to_i64, value_to_u64};
use super::params::{
    AccountAndKey, AccountFilter, KeyArgs, MultiOperationChange, MultiOperationReceiver,
    MultiOperationSender, OfflineSigning, OperationOptions, RpcParams,
};
use super::RpcDispatcher;
use crate::{RpcError, RpcResult};
use pascal_config::EndPoint;
use pascal_primitives::{EcCurve, HexaString, OperationHash, PascalCurrency, PayloadMethod};
use serde_json::Value;

/// Raw node API.
#[derive(Clone, Debug)]
pub struct RawApi {
    dispatcher: RpcDispatcher,
}

impl RawApi {
    #[must_use]
    pub const fn new(dispatcher: RpcDispatcher) -> Self {
        Self { dispatcher }
    }

    /// The same API sending to `overrides`, or to the current endpoints when
    /// `overrides` is empty.
    #[must_use]
    pub fn with_endpoints(&self, overrides: &[EndPoint]) -> Self {
        Self::new(self.dispatcher.with_endpoints(overrides))
    }

    #[must_use]
    pub const fn dispatcher(&self) -> &RpcDispatcher {
        &self.dispatcher
    }

    async fn send(&self, method: &str, params: RpcParams) -> RpcResult<Value> {
        self.dispatcher.send(method, params).await
    }

    // Node

    /// Connects the node to `nodes`, given as `ip:port` strings. Returns the
    /// number of nodes added.
    pub async fn add_node<S: AsRef<str>>(&self, nodes: &[S]) -> RpcResult<i64> {
        let joined = nodes.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(";");
        let result = self.send("addnode", RpcParams::new().with("nodes", joined)).await?;
        result_as_i64(&result, "addnode")
    }

    pub async fn node_status(&self) -> RpcResult<Value> {
        self.send("nodestatus", RpcParams::new()).await
    }

    pub async fn start_node(&self) -> RpcResult<bool> {
        let result = self.send("startnode", RpcParams::new()).await?;
        result_as_bool(&result, "startnode")
    }

    pub async fn stop_node(&self) -> RpcResult<bool> {
        let result = self.send("stopnode", RpcParams::new()).await?;
        result_as_bool(&result, "stopnode")
    }

    pub async fn get_connections(&self) -> RpcResult<Value> {
        self.send("getconnections", RpcParams::new()).await
    }

    // Wallet

    pub async fn get_wallet_accounts(&self, keys: &KeyArgs, start: u64, max: u64) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with_keys("enc_pubkey", "b58_pubkey", keys)
            .with("start", start)
            .with("max", max);
        self.send("getwalletaccounts", params).await
    }

    pub async fn get_wallet_accounts_count(
        &self,
        keys: &KeyArgs,
        start: u64,
        max: u64,
    ) -> RpcResult<u64> {
        let params = RpcParams::new()
            .with_keys("enc_pubkey", "b58_pubkey", keys)
            .with("start", start)
            .with("max", max);
        let result = self.send("getwalletaccountscount", params).await?;
        result_as_u64(&result, "getwalletaccountscount")
    }

    pub async fn get_wallet_pub_keys(&self, start: u64, max: u64) -> RpcResult<Value> {
        let params = RpcParams::new().with("start", start).with("max", max);
        self.send("getwalletpubkeys", params).await
    }

    pub async fn get_wallet_pub_key(&self, keys: &KeyArgs) -> RpcResult<Value> {
        let params = RpcParams::new().with_keys("enc_pubkey", "b58_pubkey", keys);
        self.send("getwalletpubkey", params).await
    }

    /// Total balance of the wallet, or of the accounts of one key.
    pub async fn get_wallet_coins(&self, keys: &KeyArgs) -> RpcResult<Value> {
        let params = RpcParams::new().with_keys("enc_pubkey", "b58_pubkey", keys);
        self.send("getwalletcoins", params).await
    }

    pub async fn add_new_key(&self, ec_nid: EcCurve, name: Option<&str>) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("ec_nid", ec_nid.nid())
            .with_opt("name", name);
        self.send("addnewkey", params).await
    }

    pub async fn lock(&self) -> RpcResult<bool> {
        let result = self.send("lock", RpcParams::new()).await?;
        result_as_bool(&result, "lock")
    }

    pub async fn unlock(&self, pwd: &str) -> RpcResult<bool> {
        let result = self.send("unlock", RpcParams::new().with("pwd", pwd)).await?;
        result_as_bool(&result, "unlock")
    }

    pub async fn set_wallet_password(&self, pwd: &str) -> RpcResult<bool> {
        let result = self
            .send("setwalletpassword", RpcParams::new().with("pwd", pwd))
            .await?;
        result_as_bool(&result, "setwalletpassword")
    }

    // Blocks

    pub async fn get_block(&self, block: u64) -> RpcResult<Value> {
        self.send("getblock", RpcParams::new().with("block", block)).await
    }

    /// Either the `last` newest blocks, or the blocks `start..=end` capped at `max`.
    pub async fn get_blocks(&self, last: u64, start: u64, end: u64, max: u64) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("last", last)
            .with("start", start)
            .with("end", end)
            .with("max", max);
        self.send("getblocks", params).await
    }

    pub async fn get_block_count(&self) -> RpcResult<u64> {
        let result = self.send("getblockcount", RpcParams::new()).await?;
        result_as_u64(&result, "getblockcount")
    }

    pub async fn get_block_operation(&self, block: u64, opblock: u64) -> RpcResult<Value> {
        let params = RpcParams::new().with("block", block).with("opblock", opblock);
        self.send("getblockoperation", params).await
    }

    pub async fn get_block_operations(&self, block: u64, start: u64, max: u64) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("block", block)
            .with("start", start)
            .with("max", max);
        self.send("getblockoperations", params).await
    }

    // Accounts

    pub async fn get_account(&self, account: u64) -> RpcResult<Value> {
        self.send("getaccount", RpcParams::new().with("account", account)).await
    }

    pub async fn get_account_operations(
        &self,
        account: u64,
        depth: u64,
        start_block: u64,
        start: u64,
        max: u64,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("account", account)
            .with("depth", depth)
            .with("start_block", start_block)
            .with("start", start)
            .with("max", max);
        self.send("getaccountoperations", params).await
    }

    pub async fn find_accounts(&self, filter: &AccountFilter) -> RpcResult<Value> {
        self.send("findaccounts", filter.to_params()).await
    }

    // Operations

    pub async fn get_pendings(&self, start: u64, max: u64) -> RpcResult<Value> {
        let params = RpcParams::new().with("start", start).with("max", max);
        self.send("getpendings", params).await
    }

    pub async fn get_pendings_count(&self) -> RpcResult<u64> {
        let result = self.send("getpendingscount", RpcParams::new()).await?;
        result_as_u64(&result, "getpendingscount")
    }

    pub async fn decode_op_hash(&self, ophash: &OperationHash) -> RpcResult<Value> {
        self.send("decodeophash", RpcParams::new().with("ophash", ophash.value()))
            .await
    }

    pub async fn find_operation(&self, ophash: &OperationHash) -> RpcResult<Value> {
        self.send("findoperation", RpcParams::new().with("ophash", ophash.value()))
            .await
    }

    pub async fn find_n_operation(&self, account: u64, block: u64, n_operation: u64) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("account", account)
            .with("block", block)
            .with("n_operation", n_operation);
        self.send("findnoperation", params).await
    }

    pub async fn find_n_operations(
        &self,
        account: u64,
        start_block: u64,
        n_operation_min: u64,
        n_operation_max: u64,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("account", account)
            .with("start_block", start_block)
            .with("n_operation_min", n_operation_min)
            .with("n_operation_max", n_operation_max);
        self.send("findnoperations", params).await
    }

    pub async fn send_to(
        &self,
        sender: u64,
        target: u64,
        amount: &PascalCurrency,
        options: &OperationOptions,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("sender", sender)
            .with("target", target)
            .with("amount", amount.to_pascal())
            .with_options(options);
        self.send("sendto", params).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn sign_send_to(
        &self,
        signing: &OfflineSigning,
        sender_keys: &KeyArgs,
        target_keys: &KeyArgs,
        sender: u64,
        target: u64,
        amount: &PascalCurrency,
        options: &OperationOptions,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with_signing(signing)
            .with_keys("sender_enc_pubkey", "sender_b58_pubkey", sender_keys)
            .with_keys("target_enc_pubkey", "target_b58_pubkey", target_keys)
            .with("sender", sender)
            .with("target", target)
            .with("amount", amount.to_pascal())
            .with_options(options);
        self.send("signsendto", params).await
    }

    pub async fn change_key(
        &self,
        account: u64,
        account_signer: u64,
        new_keys: &KeyArgs,
        options: &OperationOptions,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("account", account)
            .with("account_signer", account_signer)
            .with_keys("new_enc_pubkey", "new_b58_pubkey", new_keys)
            .with_options(options);
        self.send("changekey", params).await
    }

    pub async fn sign_change_key(
        &self,
        signing: &OfflineSigning,
        old_keys: &KeyArgs,
        account: u64,
        account_signer: u64,
        new_keys: &KeyArgs,
        options: &OperationOptions,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with_signing(signing)
            .with_keys("old_enc_pubkey", "old_b58_pubkey", old_keys)
            .with("account", account)
            .with("account_signer", account_signer)
            .with_keys("new_enc_pubkey", "new_b58_pubkey", new_keys)
            .with_options(options);
        self.send("signchangekey", params).await
    }

    pub async fn change_keys(
        &self,
        accounts: &[u64],
        new_keys: &KeyArgs,
        options: &OperationOptions,
    ) -> RpcResult<Value> {
        let accounts = accounts
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let params = RpcParams::new()
            .with("accounts", accounts)
            .with_keys("new_enc_pubkey", "new_b58_pubkey", new_keys)
            .with_options(options);
        self.send("changekeys", params).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn list_account_for_sale(
        &self,
        account_target: u64,
        account_signer: u64,
        seller_account: u64,
        price: &PascalCurrency,
        locked_until_block: Option<u64>,
        new_keys: &KeyArgs,
        options: &OperationOptions,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("account_target", account_target)
            .with("account_signer", account_signer)
            .with("seller_account", seller_account)
            .with("price", price.to_pascal())
            .with_opt("locked_until_block", locked_until_block)
            .with_keys("new_enc_pubkey", "new_b58_pubkey", new_keys)
            .with_options(options);
        self.send("listaccountforsale", params).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn sign_list_account_for_sale(
        &self,
        signing: &OfflineSigning,
        account_target: u64,
        account_signer: u64,
        seller_account: u64,
        price: &PascalCurrency,
        locked_until_block: Option<u64>,
        new_keys: &KeyArgs,
        signer_keys: &KeyArgs,
        options: &OperationOptions,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with_signing(signing)
            .with("account_target", account_target)
            .with("account_signer", account_signer)
            .with("seller_account", seller_account)
            .with("price", price.to_pascal())
            .with_opt("locked_until_block", locked_until_block)
            .with_keys("new_enc_pubkey", "new_b58_pubkey", new_keys)
            .with_keys("signer_enc_pubkey", "signer_b58_pubkey", signer_keys)
            .with_options(options);
        self.send("signlistaccountforsale", params).await
    }

    pub async fn delist_account_for_sale(
        &self,
        account_target: u64,
        account_signer: u64,
        options: &OperationOptions,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("account_target", account_target)
            .with("account_signer", account_signer)
            .with_options(options);
        self.send("delistaccountforsale", params).await
    }

    pub async fn sign_delist_account_for_sale(
        &self,
        signing: &OfflineSigning,
        signer_keys: &KeyArgs,
        account_target: u64,
        account_signer: u64,
        options: &OperationOptions,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with_signing(signing)
            .with_keys("signer_enc_pubkey", "signer_b58_pubkey", signer_keys)
            .with("account_target", account_target)
            .with("account_signer", account_signer)
            .with_options(options);
        self.send("signdelistaccountforsale", params).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn buy_account(
        &self,
        buyer_account: u64,
        account_to_purchase: u64,
        seller_account: u64,
        price: &PascalCurrency,
        new_keys: &KeyArgs,
        amount: &PascalCurrency,
        options: &OperationOptions,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("buyer_account", buyer_account)
            .with("account_to_purchase", account_to_purchase)
            .with("seller_account", seller_account)
            .with("price", price.to_pascal())
            .with_keys("new_enc_pubkey", "new_b58pubkey", new_keys)
            .with("amount", amount.to_pascal())
            .with_options(options);
        self.send("buyaccount", params).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn sign_buy_account(
        &self,
        signing: &OfflineSigning,
        signer_keys: &KeyArgs,
        buyer_account: u64,
        account_to_purchase: u64,
        seller_account: u64,
        price: &PascalCurrency,
        new_keys: &KeyArgs,
        amount: &PascalCurrency,
        options: &OperationOptions,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with_signing(signing)
            .with_keys("signer_enc_pubkey", "signer_b58_pubkey", signer_keys)
            .with("buyer_account", buyer_account)
            .with("account_to_purchase", account_to_purchase)
            .with("seller_account", seller_account)
            .with("price", price.to_pascal())
            .with_keys("new_enc_pubkey", "new_b58pubkey", new_keys)
            .with("amount", amount.to_pascal())
            .with_options(options);
        self.send("signbuyaccount", params).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn change_account_info(
        &self,
        account_signer: u64,
        account_target: u64,
        new_keys: &KeyArgs,
        new_name: Option<&str>,
        new_type: Option<i64>,
        options: &OperationOptions,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("account_signer", account_signer)
            .with("account_target", account_target)
            .with_keys("new_enc_pubkey", "new_b58pubkey", new_keys)
            .with_opt("new_name", new_name)
            .with_opt("new_type", new_type)
            .with_options(options);
        self.send("changeaccountinfo", params).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn sign_change_account_info(
        &self,
        signing: &OfflineSigning,
        signer_keys: &KeyArgs,
        account_signer: u64,
        account_target: u64,
        new_keys: &KeyArgs,
        new_name: Option<&str>,
        new_type: Option<i64>,
        options: &OperationOptions,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with_signing(signing)
            .with_keys("signer_enc_pubkey", "signer_b58_pubkey", signer_keys)
            .with("account_signer", account_signer)
            .with("account_target", account_target)
            .with_keys("new_enc_pubkey", "new_b58pubkey", new_keys)
            .with_opt("new_name", new_name)
            .with_opt("new_type", new_type)
            .with_options(options);
        self.send("signchangeaccountinfo", params).await
    }

    pub async fn operations_info(&self, raw_operations: &HexaString) -> RpcResult<Value> {
        let params = RpcParams::new().with_raw(Some(raw_operations), None);
        self.send("operationsinfo", params).await
    }

    pub async fn execute_operations(&self, raw_operations: &HexaString) -> RpcResult<Value> {
        let params = RpcParams::new().with_raw(Some(raw_operations), None);
        self.send("executeoperations", params).await
    }

    // Multi-operations

    pub async fn multi_operation_add_operation(
        &self,
        raw_operations: Option<&HexaString>,
        senders: &[MultiOperationSender],
        receivers: &[MultiOperationReceiver],
        changes_info: &[MultiOperationChange],
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with_raw(raw_operations, None)
            .with("senders", serde_json::to_value(senders)?)
            .with("receivers", serde_json::to_value(receivers)?)
            .with("changesinfo", serde_json::to_value(changes_info)?);
        self.send("multioperationaddoperation", params).await
    }

    pub async fn multi_operation_sign_offline(
        &self,
        raw_operations: Option<&HexaString>,
        protocol: Option<u32>,
        accounts_and_keys: &[AccountAndKey],
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with_raw(raw_operations, protocol)
            .with("accounts_and_keys", serde_json::to_value(accounts_and_keys)?);
        self.send("multioperationsignoffline", params).await
    }

    pub async fn multi_operation_sign_online(
        &self,
        raw_operations: Option<&HexaString>,
    ) -> RpcResult<Value> {
        let params = RpcParams::new().with_raw(raw_operations, None);
        self.send("multioperationsignonline", params).await
    }

    /// Removes the operation at `index` from a raw operations blob.
    pub async fn operations_delete(&self, raw_operations: &HexaString, index: u64) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with_raw(Some(raw_operations), None)
            .with("index", index);
        self.send("operationsdelete", params).await
    }

    // Keys and payloads

    pub async fn encode_pub_key(&self, ec_nid: EcCurve, x: &HexaString, y: &HexaString) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("ec_nid", ec_nid.nid())
            .with("x", x.value())
            .with("y", y.value());
        self.send("encodepubkey", params).await
    }

    pub async fn decode_pub_key(&self, keys: &KeyArgs) -> RpcResult<Value> {
        let params = RpcParams::new().with_keys("enc_pubkey", "b58_pubkey", keys);
        self.send("decodepubkey", params).await
    }

    pub async fn payload_encrypt(
        &self,
        payload: &HexaString,
        keys: &KeyArgs,
        payload_method: PayloadMethod,
        pwd: &str,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("payload", payload.value())
            .with_keys("enc_pubkey", "b58_pubkey", keys)
            .with("payload_method", payload_method.as_str())
            .with("pwd", pwd);
        self.send("payloadencrypt", params).await
    }

    /// Tries the wallet keys and each of `pwds` on an encrypted payload.
    pub async fn payload_decrypt<S: AsRef<str>>(&self, payload: &HexaString, pwds: &[S]) -> RpcResult<Value> {
        let pwds: Vec<Value> = pwds.iter().map(|p| Value::from(p.as_ref())).collect();
        let params = RpcParams::new()
            .with("payload", payload.value())
            .with("pwds", pwds);
        self.send("payloaddecrypt", params).await
    }

    pub async fn sign_message(&self, digest: &HexaString, keys: &KeyArgs) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("digest", digest.value())
            .with_keys("enc_pubkey", "b58_pubkey", keys);
        self.send("signmessage", params).await
    }

    pub async fn verify_sign(
        &self,
        signature: &HexaString,
        digest: &HexaString,
        keys: &KeyArgs,
    ) -> RpcResult<Value> {
        let params = RpcParams::new()
            .with("signature", signature.value())
            .with("digest", digest.value())
            .with_keys("enc_pubkey", "b58_pubkey", keys);
        self.send("verifysign", params).await
    }
}

fn result_as_u64(value: &Value, method: &str) -> RpcResult<u64> {
    value_to_u64(value)
        .ok_or_else(|| RpcError::invalid_response(format!("{method}: expected unsigned integer result")))
}

fn result_as_i64(value: &Value, method: &str) -> RpcResult<i64> {
    value_to_i64(value)
        .ok_or_else(|| RpcError::invalid_response(format!("{method}: expected integer result")))
}

fn result_as_bool(value: &Value, method: &str) -> RpcResult<bool> {
    value_to_bool(value)
        .ok_or_else(|| RpcError::invalid_response(format!("{method}: expected boolean result")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixture::FixtureTransport;
    use pascal_primitives::{Base58PublicKey, EncodedPublicKey};
    use serde_json::json;

    fn api(transport: &FixtureTransport) -> RawApi {
        RawApi::new(transport.dispatcher())
    }

    #[tokio::test]
    async fn get_block_count_returns_number() {
        let transport = FixtureTransport::new().respond("getblockcount", json!(12345));
        assert_eq!(api(&transport).get_block_count().await.unwrap(), 12345);
        assert_eq!(transport.last_params(), json!({}));
    }

    #[tokio::test]
    async fn scalar_result_of_wrong_shape_is_invalid() {
        let transport = FixtureTransport::new().respond("getblockcount", json!({"count": 1}));
        assert!(matches!(
            api(&transport).get_block_count().await,
            Err(RpcError::InvalidResponse { .. })
        ));
    }

    #[tokio::test]
    async fn add_node_joins_with_semicolons() {
        let transport = FixtureTransport::new().respond("addnode", json!(2));
        let added = api(&transport)
            .add_node(&["10.0.0.1:4004", "10.0.0.2:4004"])
            .await
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(
            transport.last_params(),
            json!({"nodes": "10.0.0.1:4004;10.0.0.2:4004"})
        );
    }

    #[tokio::test]
    async fn node_flags_accept_booleans() {
        let transport = FixtureTransport::new()
            .respond("startnode", json!(true))
            .respond("stopnode", json!(false))
            .respond("lock", json!(true));
        let api = api(&transport);
        assert!(api.start_node().await.unwrap());
        assert!(!api.stop_node().await.unwrap());
        assert!(api.lock().await.unwrap());
    }

    #[tokio::test]
    async fn wallet_accounts_forward_only_the_given_key() {
        let transport = FixtureTransport::new().respond("getwalletaccounts", json!([]));
        let keys = KeyArgs::encoded(EncodedPublicKey::new("CA02").unwrap());
        api(&transport).get_wallet_accounts(&keys, 0, 100).await.unwrap();
        assert_eq!(
            transport.last_params(),
            json!({"enc_pubkey": "CA02", "start": 0, "max": 100})
        );
    }

    #[tokio::test]
    async fn account_operations_use_depth_and_start_block() {
        let transport = FixtureTransport::new().respond("getaccountoperations", json!([]));
        api(&transport)
            .get_account_operations(77, 100, 0, 0, 50)
            .await
            .unwrap();
        assert_eq!(
            transport.last_params(),
            json!({"account": 77, "depth": 100, "start_block": 0, "start": 0, "max": 50})
        );
    }

    #[tokio::test]
    async fn send_to_uses_options_defaults() {
        let transport = FixtureTransport::new().respond("sendto", json!({"optype": 1}));
        api(&transport)
            .send_to(
                3,
                4,
                &PascalCurrency::parse("1.5").unwrap(),
                &OperationOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(
            transport.last_params(),
            json!({
                "sender": 3, "target": 4, "amount": "1.5000", "fee": "0.0000",
                "payload": "", "payload_method": "dest", "pwd": ""
            })
        );
    }

    #[tokio::test]
    async fn sign_send_to_drops_absent_signing_members() {
        let transport = FixtureTransport::new().respond("signsendto", json!({}));
        let signing = OfflineSigning {
            raw_operations: None,
            protocol: None,
            last_n_operation: 9,
        };
        api(&transport)
            .sign_send_to(
                &signing,
                &KeyArgs::base58(Base58PublicKey::new("3Gs")),
                &KeyArgs::base58(Base58PublicKey::new("3Gt")),
                3,
                4,
                &PascalCurrency::parse("1").unwrap(),
                &OperationOptions::default(),
            )
            .await
            .unwrap();
        let params = transport.last_params();
        assert_eq!(params["last_n_operation"], json!(9));
        assert_eq!(params["sender_b58_pubkey"], json!("3Gs"));
        assert_eq!(params["target_b58_pubkey"], json!("3Gt"));
        assert!(params.get("rawoperations").is_none());
        assert!(params.get("protocol").is_none());
        assert!(params.get("sender_enc_pubkey").is_none());
    }

    #[tokio::test]
    async fn buy_account_uses_new_b58pubkey_name() {
        let transport = FixtureTransport::new().respond("buyaccount", json!({}));
        api(&transport)
            .buy_account(
                1,
                2,
                3,
                &PascalCurrency::parse("10").unwrap(),
                &KeyArgs::base58(Base58PublicKey::new("3Gn")),
                &PascalCurrency::parse("10").unwrap(),
                &OperationOptions::default(),
            )
            .await
            .unwrap();
        let params = transport.last_params();
        assert_eq!(params["new_b58pubkey"], json!("3Gn"));
        assert!(params.get("new_b58_pubkey").is_none());
        assert!(params.get("new_enc_pubkey").is_none());
    }

    #[tokio::test]
    async fn list_for_sale_keeps_null_lock() {
        let transport = FixtureTransport::new().respond("listaccountforsale", json!({}));
        api(&transport)
            .list_account_for_sale(
                5,
                5,
                6,
                &PascalCurrency::parse("2").unwrap(),
                None,
                &KeyArgs::none(),
                &OperationOptions::default(),
            )
            .await
            .unwrap();
        let params = transport.last_params();
        assert_eq!(params["locked_until_block"], Value::Null);
        assert_eq!(params["price"], json!("2.0000"));
    }

    #[tokio::test]
    async fn change_account_info_forwards_null_name_and_type() {
        let transport = FixtureTransport::new().respond("changeaccountinfo", json!({}));
        api(&transport)
            .change_account_info(1, 2, &KeyArgs::none(), None, Some(7), &OperationOptions::default())
            .await
            .unwrap();
        let params = transport.last_params();
        assert_eq!(params["new_name"], Value::Null);
        assert_eq!(params["new_type"], json!(7));
        assert!(params.get("new_b58pubkey").is_none());
    }

    #[tokio::test]
    async fn find_accounts_sends_filter() {
        let transport = FixtureTransport::new().respond("findaccounts", json!([]));
        let filter = AccountFilter {
            name: "pasc".to_string(),
            exact: false,
            ..AccountFilter::default()
        };
        api(&transport).find_accounts(&filter).await.unwrap();
        let params = transport.last_params();
        assert_eq!(params["name"], json!("pasc"));
        assert_eq!(params["exact"], json!(false));
        assert_eq!(params["type"], json!(-1));
        assert_eq!(params["max"], json!(100));
    }

    #[tokio::test]
    async fn multi_operation_serializes_entries() {
        let transport = FixtureTransport::new().respond("multioperationaddoperation", json!({}));
        let receivers = [MultiOperationReceiver {
            account: 9,
            amount: PascalCurrency::parse("1").unwrap(),
            payload: HexaString::default(),
        }];
        api(&transport)
            .multi_operation_add_operation(None, &[], &receivers, &[])
            .await
            .unwrap();
        assert_eq!(
            transport.last_params(),
            json!({
                "senders": [],
                "receivers": [{"account": 9, "amount": "1.0000", "payload": ""}],
                "changesinfo": []
            })
        );
    }

    #[tokio::test]
    async fn keys_and_payload_methods_use_node_names() {
        let transport = FixtureTransport::new()
            .respond("encodepubkey", json!("CA02"))
            .respond("payloaddecrypt", json!({"result": true}))
            .respond("addnewkey", json!({}));
        let api = api(&transport);

        api.encode_pub_key(EcCurve::Secp256k1, &HexaString::new("AA").unwrap(), &HexaString::new("BB").unwrap())
            .await
            .unwrap();
        assert_eq!(transport.last_params(), json!({"ec_nid": 714, "x": "AA", "y": "BB"}));

        api.payload_decrypt(&HexaString::new("00").unwrap(), &["a", "b"])
            .await
            .unwrap();
        assert_eq!(transport.last_params(), json!({"payload": "00", "pwds": ["a", "b"]}));

        api.add_new_key(EcCurve::Sect283k1, None).await.unwrap();
        assert_eq!(transport.last_params(), json!({"ec_nid": 729, "name": null}));
    }

    #[tokio::test]
    async fn operations_delete_sends_blob_and_index() {
        let transport = FixtureTransport::new().respond("operationsdelete", json!({}));
        api(&transport)
            .operations_delete(&HexaString::new("0100").unwrap(), 0)
            .await
            .unwrap();
        assert_eq!(transport.last_params(), json!({"rawoperations": "0100", "index": 0}));
    }

    #[tokio::test]
    async fn per_call_override_sends_elsewhere() {
        let transport = FixtureTransport::new().respond("getblockcount", json!(1));
        let other = EndPoint::with_host("192.168.7.7").unwrap();
        api(&transport)
            .with_endpoints(&[other])
            .get_block_count()
            .await
            .unwrap();
        assert_eq!(transport.endpoint_hosts(), vec!["192.168.7.7".to_string()]);
    }
}
