// Copyright (C) 2025 The pascal-rs Authors.
//
// rich/block_api.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{map_entities, map_entity, BlockRef};
use crate::client::models::{Block, Operation};
use crate::client::RawApi;
use crate::RpcResult;
use pascal_config::EndPoint;
use tracing::debug;

/// Operations requested per page by [`BlockApi::all_operations`] when the
/// caller passes a page size of 0.
pub const DEFAULT_OPERATIONS_PAGE: u64 = 100;

/// Block lookup.
#[derive(Clone, Debug)]
pub struct BlockApi {
    raw: RawApi,
}

impl BlockApi {
    #[must_use]
    pub const fn new(raw: RawApi) -> Self {
        Self { raw }
    }

    #[must_use]
    pub fn with_endpoints(&self, overrides: &[EndPoint]) -> Self {
        Self::new(self.raw.with_endpoints(overrides))
    }

    /// The `amount` newest blocks, newest first.
    pub async fn list_last(&self, amount: u64) -> RpcResult<Vec<Block>> {
        let result = self.raw.get_blocks(amount, 0, 0, 0).await?;
        map_entities(&result, "getblocks", Block::from_json)
    }

    /// Number of blocks in the chain.
    pub async fn count(&self) -> RpcResult<u64> {
        self.raw.get_block_count().await
    }

    pub async fn at<'a>(&self, block: impl Into<BlockRef<'a>>) -> RpcResult<Block> {
        let height = block.into().height();
        let result = self.raw.get_block(height).await?;
        map_entity(&result, "getblock", Block::from_json)
    }

    /// Every operation of a block, fetched `per_page` at a time.
    ///
    /// Pages are requested until one comes back shorter than `per_page`;
    /// the operations are returned in node order.
    pub async fn all_operations<'a>(
        &self,
        block: impl Into<BlockRef<'a>>,
        per_page: u64,
    ) -> RpcResult<Vec<Operation>> {
        let height = block.into().height();
        let per_page = if per_page == 0 {
            DEFAULT_OPERATIONS_PAGE
        } else {
            per_page
        };

        let mut operations = Vec::new();
        let mut start = 0;
        loop {
            let result = self.raw.get_block_operations(height, start, per_page).await?;
            let page = map_entities(&result, "getblockoperations", Operation::from_json)?;
            let fetched = page.len() as u64;
            operations.extend(page);
            debug!(target: "pascal_rpc", block = height, start, fetched, "operations page");
            if fetched < per_page {
                break;
            }
            start += per_page;
        }
        Ok(operations)
    }

    /// `limit` blocks starting at height `offset`.
    pub async fn paged(&self, limit: u64, offset: u64) -> RpcResult<Vec<Block>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let end = offset.saturating_add(limit - 1);
        let result = self.raw.get_blocks(0, offset, end, limit).await?;
        map_entities(&result, "getblocks", Block::from_json)
    }
}
