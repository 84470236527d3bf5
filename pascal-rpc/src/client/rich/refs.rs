// Copyright (C) 2025 The pascal-rs Authors.
//
// rich/refs.rs file belongs to the pascal-rs project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Arguments accepted wherever the rich API needs an account, a block or a key.

use crate::client::models::{Account, Block, PublicKey};
use crate::client::params::KeyArgs;
use pascal_primitives::{AccountNumber, Base58PublicKey, BlockNumber, EncodedPublicKey};

/// An account given by id, by checked number or by a fetched entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountRef<'a> {
    Id(u64),
    Number(AccountNumber),
    Entity(&'a Account),
}

impl AccountRef<'_> {
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Id(id) => *id,
            Self::Number(number) => number.account(),
            Self::Entity(account) => account.number.account(),
        }
    }
}

impl From<u64> for AccountRef<'_> {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<AccountNumber> for AccountRef<'_> {
    fn from(number: AccountNumber) -> Self {
        Self::Number(number)
    }
}

impl<'a> From<&'a Account> for AccountRef<'a> {
    fn from(account: &'a Account) -> Self {
        Self::Entity(account)
    }
}

/// A block given by height, by number or by a fetched entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockRef<'a> {
    Height(u64),
    Number(BlockNumber),
    Entity(&'a Block),
}

impl BlockRef<'_> {
    #[must_use]
    pub const fn height(&self) -> u64 {
        match self {
            Self::Height(height) => *height,
            Self::Number(number) => number.value(),
            Self::Entity(block) => block.number.value(),
        }
    }
}

impl From<u64> for BlockRef<'_> {
    fn from(height: u64) -> Self {
        Self::Height(height)
    }
}

impl From<BlockNumber> for BlockRef<'_> {
    fn from(number: BlockNumber) -> Self {
        Self::Number(number)
    }
}

impl<'a> From<&'a Block> for BlockRef<'a> {
    fn from(block: &'a Block) -> Self {
        Self::Entity(block)
    }
}

/// A public key in encoded or base58 form, or a wallet key record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyRef<'a> {
    Encoded(&'a EncodedPublicKey),
    Base58(&'a Base58PublicKey),
    /// Forwarded as its encoded form
    Record(&'a PublicKey),
}

impl KeyRef<'_> {
    /// The key arguments to send; exactly one form is set.
    #[must_use]
    pub fn to_key_args(&self) -> KeyArgs {
        match self {
            Self::Encoded(key) => KeyArgs::encoded((*key).clone()),
            Self::Base58(key) => KeyArgs::base58((*key).clone()),
            Self::Record(record) => KeyArgs::encoded(record.enc_pubkey.clone()),
        }
    }
}

impl<'a> From<&'a EncodedPublicKey> for KeyRef<'a> {
    fn from(key: &'a EncodedPublicKey) -> Self {
        Self::Encoded(key)
    }
}

impl<'a> From<&'a Base58PublicKey> for KeyRef<'a> {
    fn from(key: &'a Base58PublicKey) -> Self {
        Self::Base58(key)
    }
}

impl<'a> From<&'a PublicKey> for KeyRef<'a> {
    fn from(record: &'a PublicKey) -> Self {
        Self::Record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_ref_ids() {
        assert_eq!(AccountRef::from(7_u64).id(), 7);
        assert_eq!(AccountRef::from(AccountNumber::new(8)).id(), 8);
    }

    #[test]
    fn block_ref_heights() {
        assert_eq!(BlockRef::from(7_u64).height(), 7);
        assert_eq!(BlockRef::from(BlockNumber::new(9)).height(), 9);
    }

    #[test]
    fn key_ref_sets_exactly_one_form() {
        let enc = EncodedPublicKey::new("CA02").unwrap();
        let b58 = Base58PublicKey::new("3Gh");

        let args = KeyRef::from(&enc).to_key_args();
        assert_eq!(args.enc_pubkey.as_ref(), Some(&enc));
        assert!(args.b58_pubkey.is_none());

        let args = KeyRef::from(&b58).to_key_args();
        assert!(args.enc_pubkey.is_none());
        assert_eq!(args.b58_pubkey.as_ref(), Some(&b58));
    }
}
