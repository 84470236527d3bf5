//! The two textual public key encodings understood by the node.

use crate::error::{PrimitiveError, PrimitiveResult};
use crate::hexa_string::HexaString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A public key in the node's hex encoded binary form (`enc_pubkey`).
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedPublicKey(HexaString);

impl EncodedPublicKey {
    /// Validates and wraps an encoded public key.
    ///
    /// # Errors
    ///
    /// Same validation as [`HexaString::new`].
    pub fn new(value: impl Into<String>) -> PrimitiveResult<Self> {
        HexaString::new(value).map(Self)
    }

    /// The hex digits.
    #[must_use]
    pub fn value(&self) -> &str {
        self.0.value()
    }

    /// Decoded key bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes()
    }
}

impl fmt::Display for EncodedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for EncodedPublicKey {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<HexaString> for EncodedPublicKey {
    fn from(value: HexaString) -> Self {
        Self(value)
    }
}

/// A public key in base58 (with checksum) form (`b58_pubkey`).
///
/// The value is passed through to the node as is, no decoding happens here.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Base58PublicKey(String);

impl Base58PublicKey {
    /// Wraps a base58 public key.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The base58 text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Base58PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Base58PublicKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Base58PublicKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_key_uses_hex_rules() {
        let key = EncodedPublicKey::new("CA022000").unwrap();
        assert_eq!(key.value(), "CA022000");
        assert_eq!(key.to_bytes(), vec![0xca, 0x02, 0x20, 0x00]);
        assert!(EncodedPublicKey::new("CA0").is_err());
        assert!(EncodedPublicKey::new("XYZW").is_err());
    }

    #[test]
    fn base58_key_is_opaque() {
        let key = Base58PublicKey::new("3GhhbopBzdpQvKmrrx");
        assert_eq!(key.to_string(), "3GhhbopBzdpQvKmrrx");
        // Not validated, whatever the caller passes is forwarded.
        assert_eq!(Base58PublicKey::from("0OIl").value(), "0OIl");
    }
}
