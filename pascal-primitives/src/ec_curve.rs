//! `EcCurve` - OpenSSL curve ids accepted by the node.

use crate::error::PrimitiveError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Elliptic curve of a public key, identified by its OpenSSL NID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum EcCurve {
    /// secp256k1
    Secp256k1 = 714,
    /// secp384r1
    Secp384r1 = 715,
    /// secp521r1
    Secp521r1 = 716,
    /// sect283k1
    Sect283k1 = 729,
}

impl EcCurve {
    /// All curves the node accepts.
    pub const ALL: [Self; 4] = [
        Self::Secp256k1,
        Self::Secp384r1,
        Self::Sect283k1,
        Self::Secp521r1,
    ];

    /// The OpenSSL NID.
    #[must_use]
    pub const fn nid(self) -> u16 {
        self as u16
    }

    /// Looks a curve up by NID.
    #[must_use]
    pub const fn from_nid(nid: i64) -> Option<Self> {
        match nid {
            714 => Some(Self::Secp256k1),
            715 => Some(Self::Secp384r1),
            716 => Some(Self::Secp521r1),
            729 => Some(Self::Sect283k1),
            _ => None,
        }
    }

    /// Returns the curve name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Secp256k1 => "secp256k1",
            Self::Secp384r1 => "secp384r1",
            Self::Secp521r1 => "secp521r1",
            Self::Sect283k1 => "sect283k1",
        }
    }
}

impl TryFrom<i64> for EcCurve {
    type Error = PrimitiveError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_nid(value).ok_or(PrimitiveError::UnknownEcCurve { value })
    }
}

impl fmt::Display for EcCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EcCurve {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.nid())
    }
}

impl<'de> Deserialize<'de> for EcCurve {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let nid = i64::deserialize(deserializer)?;
        Self::try_from(nid).map_err(serde::de::Error::custom)
    }
}
