// Copyright (C) 2025 The pascal-rs Authors.
//
// rich/rich_api.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use super::{AccountApi, BlockApi, NodeApi, OperationsApi, WalletApi};
use crate::client::RawApi;

/// The typed facades, all bound to the same endpoints.
#[derive(Clone, Debug)]
pub struct RichApi {
    node: NodeApi,
    wallet: WalletApi,
    account: AccountApi,
    block: BlockApi,
    operations: OperationsApi,
}

impl RichApi {
    #[must_use]
    pub fn new(raw: &RawApi) -> Self {
        Self {
            node: NodeApi::new(raw.clone()),
            wallet: WalletApi::new(raw.clone()),
            account: AccountApi::new(raw.clone()),
            block: BlockApi::new(raw.clone()),
            operations: OperationsApi::new(raw.clone()),
        }
    }

    #[must_use]
    pub const fn node(&self) -> &NodeApi {
        &self.node
    }

    #[must_use]
    pub const fn wallet(&self) -> &WalletApi {
        &self.wallet
    }

    #[must_use]
    pub const fn account(&self) -> &AccountApi {
        &self.account
    }

    #[must_use]
    pub const fn block(&self) -> &BlockApi {
        &self.block
    }

    #[must_use]
    pub const fn operations(&self) -> &OperationsApi {
        &self.operations
    }
}
