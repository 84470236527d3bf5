// Copyright (C) 2025 The pascal-rs Authors.
//
// models/operation.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{Changer, ModelError, ModelResult, Receiver, Sender};
use crate::client::fields::{
    account_field, block_field, bool_or, currency_field, i64_field, list_field, optional_account,
    optional_currency, optional_string, string_or_empty, u64_field, u64_or, JsonObject,
};
use pascal_primitives::{AccountNumber, BlockNumber, OperationHash, OperationType, PascalCurrency};

/// An operation as returned by the block, account and pending operation calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Empty for operations that are not yet hashed
    pub ophash: OperationHash,

    pub valid: bool,

    /// Error text of an invalid operation
    pub errors: Option<String>,

    pub block: BlockNumber,
    pub time: u64,

    /// Position inside the block
    pub opblock: u64,

    /// Blocks mined on top of the including block
    pub maturation: u64,

    pub optype: OperationType,

    /// Acting account, absent for multi-operations
    pub account: Option<AccountNumber>,

    /// Human readable description
    pub optxt: String,

    /// Amount moved, only set for transactions
    pub amount: Option<PascalCurrency>,

    pub fee: PascalCurrency,

    /// Balance of the acting account after the operation
    pub balance: Option<PascalCurrency>,

    pub subtype: String,

    /// Signing account, absent for multi-operations
    pub signer_account: Option<AccountNumber>,

    pub senders: Vec<Sender>,
    pub receivers: Vec<Receiver>,
    pub changers: Vec<Changer>,

    /// The object this entity was read from
    pub raw: JsonObject,
}

impl Operation {
    /// Creates from JSON
    pub fn from_json(json: &JsonObject) -> ModelResult<Self> {
        let optype_value = i64_field(json, "optype")?;
        let optype = OperationType::try_from(optype_value).map_err(|source| {
            ModelError::Validation {
                field: "optype".to_string(),
                source,
            }
        })?;

        let ophash = match optional_string(json, "ophash")? {
            Some(hash) => OperationHash::new(hash).map_err(|source| ModelError::Validation {
                field: "ophash".to_string(),
                source,
            })?,
            None => OperationHash::default(),
        };

        let (account, signer_account) = if optype.is_multi() {
            (None, None)
        } else {
            (
                Some(account_field(json, "account")?),
                optional_account(json, "signer_account")?,
            )
        };

        let amount = if optype == OperationType::Transaction {
            Some(currency_field(json, "amount")?)
        } else {
            None
        };

        Ok(Self {
            ophash,
            valid: bool_or(json, "valid", true)?,
            errors: optional_string(json, "errors")?,
            block: block_field(json, "block")?,
            time: u64_field(json, "time")?,
            opblock: u64_or(json, "opblock", 0)?,
            maturation: u64_or(json, "maturation", 0)?,
            optype,
            account,
            optxt: string_or_empty(json, "optxt")?,
            amount,
            fee: currency_field(json, "fee")?,
            balance: optional_currency(json, "balance")?,
            subtype: string_or_empty(json, "subtype")?,
            signer_account,
            senders: list_field(json, "senders", Sender::from_json)?,
            receivers: list_field(json, "receivers", Receiver::from_json)?,
            changers: list_field(json, "changers", Changer::from_json)?,
            raw: json.clone(),
        })
    }

    /// A copy of this operation with maturation one block higher.
    #[must_use]
    pub fn matured(&self) -> Self {
        Self {
            maturation: self.maturation.saturating_add(1),
            ..self.clone()
        }
    }

    /// True while the operation still waits in the pending pool.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.block.value() == 0 && self.ophash.value().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn obj(value: Value) -> JsonObject {
        value.as_object().cloned().expect("object")
    }

    fn transaction() -> JsonObject {
        obj(json!({
            "block": 100,
            "time": 1_500_000_000,
            "opblock": 2,
            "maturation": 10,
            "optype": 1,
            "subtype": 12,
            "account": 33,
            "signer_account": 33,
            "optxt": "Tx-In 1.0000 PASC from 33-xx to 44-xx",
            "amount": 1,
            "fee": 0,
            "balance": 5,
            "ophash": "64000000210000000200000045A9B4C4",
            "senders": [{"account": 33, "n_operation": 2, "amount": -1, "payload": ""}],
            "receivers": [{"account": 44, "amount": 1, "payload": ""}],
            "changers": []
        }))
    }

    #[test]
    fn transaction_parses_with_amount() {
        let op = Operation::from_json(&transaction()).unwrap();
        assert_eq!(op.optype, OperationType::Transaction);
        assert!(op.valid);
        assert_eq!(op.errors, None);
        assert_eq!(op.account.as_ref().map(AccountNumber::account), Some(33));
        assert_eq!(op.amount.as_ref().map(PascalCurrency::to_pascal).as_deref(), Some("1.0000"));
        assert_eq!(op.subtype, "12");
        assert_eq!(op.senders.len(), 1);
        assert_eq!(op.receivers[0].account.account(), 44);
        assert!(op.changers.is_empty());
        assert!(!op.is_pending());
    }

    #[test]
    fn amount_only_for_transactions() {
        let mut json = transaction();
        json.insert("optype".to_string(), json!(2));
        let op = Operation::from_json(&json).unwrap();
        assert_eq!(op.optype, OperationType::ChangeKey);
        assert_eq!(op.amount, None);
    }

    #[test]
    fn multi_operation_has_no_single_account() {
        let json = obj(json!({
            "block": 0,
            "time": 0,
            "optype": 9,
            "fee": 0,
            "senders": [{"account": 1, "n_operation": 1, "amount": -2}],
            "receivers": [{"account": 2, "amount": 1}, {"account": 3, "amount": 1}]
        }));
        let op = Operation::from_json(&json).unwrap();
        assert!(op.optype.is_multi());
        assert_eq!(op.account, None);
        assert_eq!(op.signer_account, None);
        assert_eq!(op.receivers.len(), 2);
        assert!(op.ophash.value().is_empty());
        assert!(op.is_pending());
    }

    #[test]
    fn invalid_optype_is_rejected() {
        let mut json = transaction();
        json.insert("optype".to_string(), json!(42));
        assert!(matches!(
            Operation::from_json(&json),
            Err(ModelError::Validation { ref field, .. }) if field == "optype"
        ));
    }

    #[test]
    fn invalid_operations_carry_errors() {
        let mut json = transaction();
        json.insert("valid".to_string(), json!(false));
        json.insert("errors".to_string(), json!("Invalid n_operation"));
        let op = Operation::from_json(&json).unwrap();
        assert!(!op.valid);
        assert_eq!(op.errors.as_deref(), Some("Invalid n_operation"));
    }

    #[test]
    fn matured_increments_only_maturation() {
        let op = Operation::from_json(&transaction()).unwrap();
        let next = op.matured();
        assert_eq!(next.maturation, 11);
        assert_eq!(op.maturation, 10);
        assert_eq!(next.ophash, op.ophash);
    }
}
