//! Hex encoded byte strings as used by the node (payloads, hashes, keys).

use crate::error::{PrimitiveError, PrimitiveResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A string of hex digits with an even length.
///
/// Input casing is preserved, `to_bytes` decodes either case.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexaString(String);

impl HexaString {
    /// Validates and wraps a hex string. The empty string is valid.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidHex` for characters outside
    /// `[0-9A-Fa-f]` and `PrimitiveError::UnevenHex` for an odd length.
    pub fn new(value: impl Into<String>) -> PrimitiveResult<Self> {
        let value = value.into();
        if !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PrimitiveError::InvalidHex { value });
        }
        if value.len() % 2 != 0 {
            return Err(PrimitiveError::UnevenHex {
                length: value.len(),
            });
        }
        Ok(Self(value))
    }

    /// Hex encodes raw bytes (lowercase).
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    /// The hex digits.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns true for the empty string.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decodes the digits into bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        // Validated on construction, decoding can not fail.
        hex::decode(&self.0).unwrap_or_default()
    }

    /// Interprets the decoded bytes as text, replacing invalid UTF-8.
    #[must_use]
    pub fn to_ascii(&self) -> String {
        String::from_utf8_lossy(&self.to_bytes()).into_owned()
    }
}

impl fmt::Display for HexaString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexaString {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for HexaString {
    type Error = PrimitiveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HexaString> for String {
    fn from(value: HexaString) -> Self {
        value.0
    }
}

impl AsRef<str> for HexaString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Hash identifying an operation (`ophash`). Reward operations carry an empty hash.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationHash(HexaString);

impl OperationHash {
    /// Validates and wraps an operation hash.
    ///
    /// # Errors
    ///
    /// Same validation as [`HexaString::new`].
    pub fn new(value: impl Into<String>) -> PrimitiveResult<Self> {
        HexaString::new(value).map(Self)
    }

    /// The hash digits.
    #[must_use]
    pub fn value(&self) -> &str {
        self.0.value()
    }

    /// The hash as a generic hex string.
    #[must_use]
    pub const fn as_hexa(&self) -> &HexaString {
        &self.0
    }
}

impl fmt::Display for OperationHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for OperationHash {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_empty_and_mixed_case() {
        assert!(HexaString::new("").unwrap().is_empty());
        assert_eq!(HexaString::new("aBcD").unwrap().value(), "aBcD");
    }

    #[test]
    fn rejects_non_hex() {
        assert_eq!(
            HexaString::new("zz"),
            Err(PrimitiveError::InvalidHex {
                value: "zz".to_string()
            })
        );
        assert!(HexaString::new("0x00").is_err());
    }

    #[test]
    fn rejects_odd_length() {
        assert_eq!(
            HexaString::new("abc"),
            Err(PrimitiveError::UnevenHex { length: 3 })
        );
    }

    #[test]
    fn to_ascii_decodes_text() {
        let hex = HexaString::new("48656c6c6f").unwrap();
        assert_eq!(hex.to_ascii(), "Hello");
        assert_eq!(hex.to_bytes(), b"Hello".to_vec());
    }

    #[test]
    fn operation_hash_validates() {
        assert!(OperationHash::new("").is_ok());
        assert!(OperationHash::new("0A").is_ok());
        assert!(OperationHash::new("0").is_err());
    }

    proptest! {
        #[test]
        fn even_hex_is_kept_verbatim(s in "([0-9A-Fa-f]{2}){0,64}") {
            let hex = HexaString::new(s.clone()).unwrap();
            prop_assert_eq!(hex.value(), s.as_str());
            let reencoded = HexaString::from_bytes(&hex.to_bytes());
            prop_assert_eq!(reencoded.value(), s.to_lowercase());
        }

        #[test]
        fn odd_hex_is_rejected(s in "[0-9a-f]([0-9a-f]{2}){0,32}") {
            prop_assert!(HexaString::new(s).is_err());
        }
    }
}
