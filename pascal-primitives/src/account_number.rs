//! `AccountNumber`, the public identifier of a PascalCoin account.

use crate::error::{PrimitiveError, PrimitiveResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An account id together with its checksum.
///
/// The checksum is always `(account * 101) % 89 + 10`. The textual form is
/// `account-checksum`, e.g. `1-21`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountNumber {
    account: u64,
    checksum: u32,
}

impl AccountNumber {
    /// Creates an account number from its id, computing the checksum.
    #[must_use]
    pub const fn new(account: u64) -> Self {
        Self {
            account,
            checksum: Self::calculate_checksum(account),
        }
    }

    /// Computes the checksum of an account id.
    #[must_use]
    pub const fn calculate_checksum(account: u64) -> u32 {
        // u128 keeps `account * 101` from overflowing for ids close to u64::MAX.
        ((account as u128 * 101) % 89) as u32 + 10
    }

    /// Parses either `id-checksum` (checksum validated) or a bare id.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidChecksum` when the checksum does not
    /// belong to the id and `PrimitiveError::InvalidAccountNumber` when either
    /// part is not a number.
    pub fn parse(value: &str) -> PrimitiveResult<Self> {
        let invalid = || PrimitiveError::InvalidAccountNumber {
            value: value.to_string(),
        };

        let trimmed = value.trim();
        match trimmed.split_once('-') {
            Some((account, checksum)) => {
                let account = account.parse::<u64>().map_err(|_| invalid())?;
                let checksum = checksum.parse::<u32>().map_err(|_| invalid())?;
                Self::with_checksum(account, checksum)
            }
            None => trimmed.parse::<u64>().map(Self::new).map_err(|_| invalid()),
        }
    }

    /// Creates an account number from an id and a checksum, validating the pair.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidChecksum` if `checksum` is not the
    /// checksum of `account`.
    pub fn with_checksum(account: u64, checksum: u32) -> PrimitiveResult<Self> {
        let expected = Self::calculate_checksum(account);
        if checksum != expected {
            return Err(PrimitiveError::InvalidChecksum {
                account,
                expected,
                actual: checksum,
            });
        }
        Ok(Self { account, checksum })
    }

    /// The account id.
    #[inline]
    #[must_use]
    pub const fn account(&self) -> u64 {
        self.account
    }

    /// The checksum.
    #[inline]
    #[must_use]
    pub const fn checksum(&self) -> u32 {
        self.checksum
    }

    /// The value sent to the node (the bare id).
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.account
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.account, self.checksum)
    }
}

impl FromStr for AccountNumber {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for AccountNumber {
    fn from(account: u64) -> Self {
        Self::new(account)
    }
}

impl From<AccountNumber> for u64 {
    fn from(value: AccountNumber) -> Self {
        value.account
    }
}

impl TryFrom<String> for AccountNumber {
    type Error = PrimitiveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccountNumber> for String {
    fn from(value: AccountNumber) -> Self {
        value.to_string()
    }
}
