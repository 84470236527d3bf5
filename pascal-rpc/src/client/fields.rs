// Copyright (C) 2025 The pascal-rs Authors.
//
// client/fields.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Field readers shared by the entity models.
//!
//! Nodes are loose about scalar encodings: counters sometimes arrive as
//! strings and flags as `0`/`1`. The readers accept those forms and report
//! the offending field name otherwise.

pub(crate) use super::models::JsonObject;
use super::models::{ModelError, ModelResult};
use pascal_primitives::{
    AccountNumber, BlockNumber, EncodedPublicKey, HexaString, PascalCurrency, PrimitiveError,
};
use serde_json::Value;

pub(crate) fn as_object<'a>(value: &'a Value, context: &str) -> ModelResult<&'a JsonObject> {
    value.as_object().ok_or_else(|| ModelError::ExpectedObject {
        context: context.to_string(),
    })
}

pub(crate) fn as_array<'a>(value: &'a Value, context: &str) -> ModelResult<&'a Vec<Value>> {
    value.as_array().ok_or_else(|| ModelError::ExpectedArray {
        context: context.to_string(),
    })
}

/// A present, non null field.
pub(crate) fn present<'a>(obj: &'a JsonObject, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null())
}

pub(crate) fn required<'a>(obj: &'a JsonObject, field: &str) -> ModelResult<&'a Value> {
    present(obj, field).ok_or_else(|| ModelError::missing(field))
}

fn validation(field: &str) -> impl FnOnce(PrimitiveError) -> ModelError + '_ {
    move |source| ModelError::Validation {
        field: field.to_string(),
        source,
    }
}

pub(crate) fn value_to_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn value_to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(_) => value_to_i64(value).map(|n| n != 0),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Renders a scalar as text, numbers keep their JSON spelling.
pub(crate) fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn u64_field(obj: &JsonObject, field: &str) -> ModelResult<u64> {
    value_to_u64(required(obj, field)?).ok_or_else(|| ModelError::invalid(field, "expected unsigned integer"))
}

pub(crate) fn u64_or(obj: &JsonObject, field: &str, default: u64) -> ModelResult<u64> {
    present(obj, field).map_or(Ok(default), |_| u64_field(obj, field))
}

pub(crate) fn optional_u64(obj: &JsonObject, field: &str) -> ModelResult<Option<u64>> {
    present(obj, field).map(|_| u64_field(obj, field)).transpose()
}

pub(crate) fn i64_field(obj: &JsonObject, field: &str) -> ModelResult<i64> {
    value_to_i64(required(obj, field)?).ok_or_else(|| ModelError::invalid(field, "expected integer"))
}

pub(crate) fn optional_i64(obj: &JsonObject, field: &str) -> ModelResult<Option<i64>> {
    present(obj, field).map(|_| i64_field(obj, field)).transpose()
}

pub(crate) fn u32_field(obj: &JsonObject, field: &str) -> ModelResult<u32> {
    u32::try_from(u64_field(obj, field)?).map_err(|_| ModelError::invalid(field, "out of range"))
}

pub(crate) fn u16_field(obj: &JsonObject, field: &str) -> ModelResult<u16> {
    u16::try_from(u64_field(obj, field)?).map_err(|_| ModelError::invalid(field, "out of range"))
}

pub(crate) fn bool_field(obj: &JsonObject, field: &str) -> ModelResult<bool> {
    value_to_bool(required(obj, field)?).ok_or_else(|| ModelError::invalid(field, "expected boolean"))
}

pub(crate) fn bool_or(obj: &JsonObject, field: &str, default: bool) -> ModelResult<bool> {
    present(obj, field).map_or(Ok(default), |_| bool_field(obj, field))
}

pub(crate) fn string_field(obj: &JsonObject, field: &str) -> ModelResult<String> {
    value_to_text(required(obj, field)?).ok_or_else(|| ModelError::invalid(field, "expected string"))
}

pub(crate) fn string_or_empty(obj: &JsonObject, field: &str) -> ModelResult<String> {
    Ok(optional_string(obj, field)?.unwrap_or_default())
}

pub(crate) fn optional_string(obj: &JsonObject, field: &str) -> ModelResult<Option<String>> {
    present(obj, field).map(|_| string_field(obj, field)).transpose()
}

pub(crate) fn hex_field(obj: &JsonObject, field: &str) -> ModelResult<HexaString> {
    HexaString::new(string_field(obj, field)?).map_err(validation(field))
}

pub(crate) fn hex_or_empty(obj: &JsonObject, field: &str) -> ModelResult<HexaString> {
    present(obj, field).map_or(Ok(HexaString::default()), |_| hex_field(obj, field))
}

pub(crate) fn encoded_key_field(obj: &JsonObject, field: &str) -> ModelResult<EncodedPublicKey> {
    hex_field(obj, field).map(EncodedPublicKey::from)
}

pub(crate) fn optional_encoded_key(
    obj: &JsonObject,
    field: &str,
) -> ModelResult<Option<EncodedPublicKey>> {
    present(obj, field).map(|_| encoded_key_field(obj, field)).transpose()
}

/// Reads an amount expressed in pascals, e.g. `12.3456`.
pub(crate) fn currency_field(obj: &JsonObject, field: &str) -> ModelResult<PascalCurrency> {
    PascalCurrency::parse(&string_field(obj, field)?).map_err(validation(field))
}

pub(crate) fn optional_currency(
    obj: &JsonObject,
    field: &str,
) -> ModelResult<Option<PascalCurrency>> {
    present(obj, field).map(|_| currency_field(obj, field)).transpose()
}

/// Reads an account given either as a bare id or as `id-checksum`.
pub(crate) fn account_field(obj: &JsonObject, field: &str) -> ModelResult<AccountNumber> {
    let value = required(obj, field)?;
    match value_to_u64(value) {
        Some(id) => Ok(AccountNumber::new(id)),
        None => {
            let text = value_to_text(value)
                .ok_or_else(|| ModelError::invalid(field, "expected account number"))?;
            AccountNumber::parse(&text).map_err(validation(field))
        }
    }
}

pub(crate) fn optional_account(
    obj: &JsonObject,
    field: &str,
) -> ModelResult<Option<AccountNumber>> {
    present(obj, field).map(|_| account_field(obj, field)).transpose()
}

pub(crate) fn block_field(obj: &JsonObject, field: &str) -> ModelResult<BlockNumber> {
    u64_field(obj, field).map(BlockNumber::new)
}

/// Maps every element of an optional array field, missing or null yields an empty list.
pub(crate) fn list_field<T>(
    obj: &JsonObject,
    field: &str,
    factory: impl Fn(&JsonObject) -> ModelResult<T>,
) -> ModelResult<Vec<T>> {
    match present(obj, field) {
        None => Ok(Vec::new()),
        Some(value) => as_array(value, field)?
            .iter()
            .map(|item| as_object(item, field).and_then(&factory))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> JsonObject {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn numbers_accept_string_and_float_forms() {
        let o = obj(json!({"a": 5, "b": "6", "c": 7.0, "d": -1, "e": "x"}));
        assert_eq!(u64_field(&o, "a").unwrap(), 5);
        assert_eq!(u64_field(&o, "b").unwrap(), 6);
        assert_eq!(u64_field(&o, "c").unwrap(), 7);
        assert!(u64_field(&o, "d").is_err());
        assert_eq!(i64_field(&o, "d").unwrap(), -1);
        assert!(matches!(
            u64_field(&o, "e"),
            Err(ModelError::InvalidField { ref field, .. }) if field == "e"
        ));
    }

    #[test]
    fn missing_and_null_fields_are_missing() {
        let o = obj(json!({"n": null}));
        assert!(matches!(u64_field(&o, "n"), Err(ModelError::MissingField { .. })));
        assert!(matches!(u64_field(&o, "z"), Err(ModelError::MissingField { .. })));
        assert_eq!(optional_u64(&o, "n").unwrap(), None);
        assert_eq!(u64_or(&o, "z", 3).unwrap(), 3);
    }

    #[test]
    fn booleans_accept_numeric_flags() {
        let o = obj(json!({"t": true, "one": 1, "zero": 0, "s": "true"}));
        assert!(bool_field(&o, "t").unwrap());
        assert!(bool_field(&o, "one").unwrap());
        assert!(!bool_field(&o, "zero").unwrap());
        assert!(bool_field(&o, "s").unwrap());
        assert!(bool_or(&o, "missing", true).unwrap());
    }

    #[test]
    fn currency_reads_numbers_and_strings() {
        let o = obj(json!({"a": 12.3456, "b": "1,000", "c": 5}));
        assert_eq!(currency_field(&o, "a").unwrap().molinas(), "123456");
        assert_eq!(currency_field(&o, "b").unwrap().molinas(), "10000000");
        assert_eq!(currency_field(&o, "c").unwrap().to_pascal(), "5.0000");
    }

    #[test]
    fn account_reads_id_or_checksummed_form() {
        let o = obj(json!({"a": 77, "b": "77-44", "c": "77-10"}));
        assert_eq!(account_field(&o, "a").unwrap().to_string(), "77-44");
        assert_eq!(account_field(&o, "b").unwrap().account(), 77);
        assert!(matches!(
            account_field(&o, "c"),
            Err(ModelError::Validation { ref field, .. }) if field == "c"
        ));
    }

    #[test]
    fn invalid_hex_reports_field() {
        let o = obj(json!({"h": "abc"}));
        assert!(matches!(
            hex_field(&o, "h"),
            Err(ModelError::Validation { ref field, .. }) if field == "h"
        ));
        assert!(hex_or_empty(&o, "missing").unwrap().is_empty());
    }
}
