//! Error types for primitive value construction.

use thiserror::Error;

/// Errors raised while constructing a primitive value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    /// The checksum part of an `id-checksum` string does not match the id.
    #[error("Invalid checksum for account {account}: expected {expected}, got {actual}")]
    InvalidChecksum {
        /// Account id.
        account: u64,
        /// Checksum computed from the id.
        expected: u32,
        /// Checksum found in the input.
        actual: u32,
    },

    /// The account number could not be parsed.
    #[error("Invalid account number: {value}")]
    InvalidAccountNumber {
        /// Offending input.
        value: String,
    },

    /// The input contains characters outside `[0-9A-Fa-f]`.
    #[error("Invalid hexadecimal string: {value}")]
    InvalidHex {
        /// Offending input.
        value: String,
    },

    /// The input has an odd number of hex digits.
    #[error("Uneven hexadecimal string (length {length})")]
    UnevenHex {
        /// Length of the input.
        length: usize,
    },

    /// The input is not a currency amount.
    #[error("Invalid currency value '{value}': {reason}")]
    InvalidCurrency {
        /// Offending input.
        value: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Account state other than `normal` or `listed`.
    #[error("Unknown account state: {value}")]
    UnknownAccountState {
        /// Offending input.
        value: String,
    },

    /// EC curve id not supported by the node.
    #[error("Unknown EC curve id: {value}")]
    UnknownEcCurve {
        /// Offending input.
        value: i64,
    },

    /// Operation type outside 0..=9.
    #[error("Unknown operation type: {value}")]
    UnknownOperationType {
        /// Offending input.
        value: i64,
    },

    /// Payload method other than none, dest, sender or aes.
    #[error("Unknown payload method: {value}")]
    UnknownPayloadMethod {
        /// Offending input.
        value: String,
    },
}

/// Result type for primitive construction.
pub type PrimitiveResult<T> = std::result::Result<T, PrimitiveError>;
