// Copyright (C) 2025 The pascal-rs Authors.
//
// rich/operations_api.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{map_entities, BlockRef};
use crate::client::models::Operation;
use crate::client::RawApi;
use crate::RpcResult;
use pascal_config::EndPoint;

/// Operation lookup.
#[derive(Clone, Debug)]
pub struct OperationsApi {
    raw: RawApi,
}

impl OperationsApi {
    #[must_use]
    pub const fn new(raw: RawApi) -> Self {
        Self { raw }
    }

    #[must_use]
    pub fn with_endpoints(&self, overrides: &[EndPoint]) -> Self {
        Self::new(self.raw.with_endpoints(overrides))
    }

    /// `limit` operations of a block starting at position `offset`.
    pub async fn in_block<'a>(
        &self,
        block: impl Into<BlockRef<'a>>,
        offset: u64,
        limit: u64,
    ) -> RpcResult<Vec<Operation>> {
        let height = block.into().height();
        let result = self.raw.get_block_operations(height, offset, limit).await?;
        map_entities(&result, "getblockoperations", Operation::from_json)
    }

    /// Operations waiting in the node's pending pool.
    pub async fn pending(&self, offset: u64, limit: u64) -> RpcResult<Vec<Operation>> {
        let result = self.raw.get_pendings(offset, limit).await?;
        map_entities(&result, "getpendings", Operation::from_json)
    }
}
