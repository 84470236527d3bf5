// Copyright (C) 2025 The pascal-rs Authors.
//
// rich/mod.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Typed facades over [`RawApi`](super::RawApi).

mod account_api;
mod block_api;
mod node_api;
mod operations_api;
mod refs;
mod rich_api;
mod wallet_api;

pub use account_api::AccountApi;
pub use block_api::BlockApi;
pub use node_api::NodeApi;
pub use operations_api::OperationsApi;
pub use refs::{AccountRef, BlockRef, KeyRef};
pub use rich_api::RichApi;
pub use wallet_api::WalletApi;

use super::fields::{as_array, as_object, JsonObject};
use super::models::ModelResult;
use crate::RpcResult;
use serde_json::Value;

/// Maps a single object result.
pub(crate) fn map_entity<T>(
    value: &Value,
    context: &str,
    factory: impl Fn(&JsonObject) -> ModelResult<T>,
) -> RpcResult<T> {
    Ok(factory(as_object(value, context)?)?)
}

/// Maps an array result element by element, keeping the node's order.
pub(crate) fn map_entities<T>(
    value: &Value,
    context: &str,
    factory: impl Fn(&JsonObject) -> ModelResult<T>,
) -> RpcResult<Vec<T>> {
    as_array(value, context)?
        .iter()
        .map(|item| map_entity(item, context, &factory))
        .collect()
}
