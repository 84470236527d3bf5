//! `PayloadMethod` - how the node encrypts an operation payload.

use crate::error::PrimitiveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payload encryption method (`payload_method`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadMethod {
    /// Plain payload.
    None,
    /// Encrypted with the receiver's public key.
    #[default]
    Dest,
    /// Encrypted with the sender's public key.
    Sender,
    /// Encrypted with a password.
    Aes,
}

impl PayloadMethod {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Dest => "dest",
            Self::Sender => "sender",
            Self::Aes => "aes",
        }
    }
}

impl fmt::Display for PayloadMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayloadMethod {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "dest" => Ok(Self::Dest),
            "sender" => Ok(Self::Sender),
            "aes" => Ok(Self::Aes),
            other => Err(PrimitiveError::UnknownPayloadMethod {
                value: other.to_string(),
            }),
        }
    }
}
