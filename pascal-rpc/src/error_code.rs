//! Catalog of error codes a PascalCoin node reports.

use std::fmt;

/// Error codes returned in the `error.code` field of a node response.
///
/// Codes outside the catalog map to [`RpcErrorCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum RpcErrorCode {
    /// Code not in the catalog.
    Unknown = 0,
    InternalError = 100,
    NotImplemented = 101,
    MethodNotFound = 1001,
    InvalidAccount = 1002,
    InvalidBlock = 1003,
    InvalidOperation = 1004,
    InvalidPubKey = 1005,
    InvalidAccountName = 1006,
    NotFound = 1010,
    WalletPasswordProtected = 1015,
    InvalidData = 1016,
    InvalidSignature = 1020,
    NotAllowedCall = 1021,
}

impl RpcErrorCode {
    /// Every catalogued code, `Unknown` excluded.
    pub const KNOWN: [Self; 13] = [
        Self::InternalError,
        Self::NotImplemented,
        Self::MethodNotFound,
        Self::InvalidAccount,
        Self::InvalidBlock,
        Self::InvalidOperation,
        Self::InvalidPubKey,
        Self::InvalidAccountName,
        Self::NotFound,
        Self::WalletPasswordProtected,
        Self::InvalidData,
        Self::InvalidSignature,
        Self::NotAllowedCall,
    ];

    /// Classifies a raw code.
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|known| known.code() == code)
            .unwrap_or(Self::Unknown)
    }

    /// Numeric value of the code.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for RpcErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}
