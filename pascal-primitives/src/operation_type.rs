//! `OperationType` - the ten operation kinds of the ledger.

use crate::error::PrimitiveError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Kind of a ledger operation (`optype`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OperationType {
    /// Block reward paid to the miner.
    BlockReward = 0,
    /// Transfer between accounts.
    Transaction = 1,
    /// Key change signed by the account itself.
    ChangeKey = 2,
    /// Funds recovered from an inactive account.
    RecoverFunds = 3,
    /// Account listed for sale.
    ListForSale = 4,
    /// Account removed from sale.
    Delist = 5,
    /// Account purchase.
    Buy = 6,
    /// Key change signed by another account.
    ChangeKeySigned = 7,
    /// Name or type change.
    ChangeAccountInfo = 8,
    /// Multi-operation with several senders, receivers or changers.
    MultiOperation = 9,
}

impl OperationType {
    /// Numeric wire value.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    /// Creates from the numeric wire value.
    #[must_use]
    pub const fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::BlockReward),
            1 => Some(Self::Transaction),
            2 => Some(Self::ChangeKey),
            3 => Some(Self::RecoverFunds),
            4 => Some(Self::ListForSale),
            5 => Some(Self::Delist),
            6 => Some(Self::Buy),
            7 => Some(Self::ChangeKeySigned),
            8 => Some(Self::ChangeAccountInfo),
            9 => Some(Self::MultiOperation),
            _ => None,
        }
    }

    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BlockReward => "BlockReward",
            Self::Transaction => "Transaction",
            Self::ChangeKey => "ChangeKey",
            Self::RecoverFunds => "RecoverFunds",
            Self::ListForSale => "ListForSale",
            Self::Delist => "Delist",
            Self::Buy => "Buy",
            Self::ChangeKeySigned => "ChangeKeySigned",
            Self::ChangeAccountInfo => "ChangeAccountInfo",
            Self::MultiOperation => "MultiOperation",
        }
    }

    /// Multi-operations have no single account or signer.
    #[must_use]
    pub const fn is_multi(self) -> bool {
        matches!(self, Self::MultiOperation)
    }
}

impl TryFrom<i64> for OperationType {
    type Error = PrimitiveError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(PrimitiveError::UnknownOperationType { value })
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for OperationType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.to_byte())
    }
}

impl<'de> Deserialize<'de> for OperationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_ten_values_map() {
        for value in 0..10 {
            let op = OperationType::try_from(value).unwrap();
            assert_eq!(i64::from(op.to_byte()), value);
        }
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert!(OperationType::try_from(10).is_err());
        assert!(OperationType::try_from(-1).is_err());
    }

    #[test]
    fn only_multi_is_multi() {
        assert!(OperationType::MultiOperation.is_multi());
        assert!(!OperationType::Transaction.is_multi());
    }
}
