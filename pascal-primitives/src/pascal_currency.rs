//! `PascalCurrency`, a fixed point amount stored as molinas.

use crate::error::{PrimitiveError, PrimitiveResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Number of molinas in one pascal.
pub const MOLINAS_PER_PASCAL: u32 = 10_000;

/// Number of decimal places of a pascal amount.
const DECIMALS: usize = 4;

/// A currency amount kept as a base-10 integer string of molinas.
///
/// The string form avoids any float rounding, use [`PascalCurrency::to_molina_units`]
/// for arithmetic. Equality and hashing compare the amount, so leading zeros
/// kept by [`PascalCurrency::from_molinas`] do not matter.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PascalCurrency {
    molinas: String,
}

impl PascalCurrency {
    /// Parses a human readable amount such as `1,234.5` or `-0.0001`.
    ///
    /// Thousands separators are dropped, the fraction is right padded to four
    /// digits and leading zeros are trimmed.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidCurrency` for empty input, non digit
    /// characters, more than one decimal point or more than four decimals.
    pub fn parse(value: &str) -> PrimitiveResult<Self> {
        let invalid = |reason: &str| PrimitiveError::InvalidCurrency {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let cleaned: String = value.trim().chars().filter(|c| *c != ',').collect();
        let (negative, unsigned) = match cleaned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cleaned.as_str()),
        };
        if unsigned.is_empty() {
            return Err(invalid("empty amount"));
        }

        let mut parts = unsigned.split('.');
        let integer = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();
        if parts.next().is_some() {
            return Err(invalid("more than one decimal point"));
        }
        if !integer.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid("not a decimal number"));
        }
        if fraction.len() > DECIMALS {
            return Err(invalid("more than four decimals"));
        }
        if integer.is_empty() && fraction.is_empty() {
            return Err(invalid("empty amount"));
        }

        let digits = format!("{integer}{fraction:0<DECIMALS$}");
        Ok(Self {
            molinas: normalize(negative, &digits),
        })
    }

    /// Wraps a value that is already an integer string of molinas.
    ///
    /// The digits are kept as given, no reformatting happens.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError::InvalidCurrency` if the input is not an
    /// optionally signed integer.
    pub fn from_molinas(molinas: impl Into<String>) -> PrimitiveResult<Self> {
        let molinas = molinas.into();
        let unsigned = molinas.strip_prefix('-').unwrap_or(&molinas);
        if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PrimitiveError::InvalidCurrency {
                value: molinas,
                reason: "not an integer molina amount".to_string(),
            });
        }
        Ok(Self { molinas })
    }

    /// Creates an amount from an integer number of molinas.
    #[must_use]
    pub fn from_molina_units(molinas: i128) -> Self {
        Self {
            molinas: molinas.to_string(),
        }
    }

    /// The zero amount.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            molinas: "0".to_string(),
        }
    }

    /// The amount in molinas as an integer string.
    #[inline]
    #[must_use]
    pub fn molinas(&self) -> &str {
        &self.molinas
    }

    /// The amount in molinas as an integer, `None` if it does not fit.
    #[must_use]
    pub fn to_molina_units(&self) -> Option<i128> {
        self.molinas.parse().ok()
    }

    /// Renders the amount with four decimals, e.g. `1234.5000` or `0.0001`.
    #[must_use]
    pub fn to_pascal(&self) -> String {
        let (sign, digits) = match self.molinas.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", self.molinas.as_str()),
        };

        if digits.len() <= DECIMALS {
            return format!("{sign}0.{digits:0>DECIMALS$}");
        }

        let split = digits.len() - DECIMALS;
        format!("{sign}{}.{}", &digits[..split], &digits[split..])
    }

    /// Returns true for a zero amount.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.canonical().1.is_empty()
    }

    /// Sign and digits without leading zeros; zero has no sign and no digits.
    fn canonical(&self) -> (bool, &str) {
        let (negative, digits) = match self.molinas.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, self.molinas.as_str()),
        };
        let digits = digits.trim_start_matches('0');
        (negative && !digits.is_empty(), digits)
    }
}

impl PartialEq for PascalCurrency {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for PascalCurrency {}

impl Hash for PascalCurrency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

fn normalize(negative: bool, digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_string()
    } else if negative {
        format!("-{trimmed}")
    } else {
        trimmed.to_string()
    }
}

impl Default for PascalCurrency {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for PascalCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pascal())
    }
}

impl FromStr for PascalCurrency {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PascalCurrency {
    type Error = PrimitiveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PascalCurrency> for String {
    fn from(value: PascalCurrency) -> Self {
        value.to_pascal()
    }
}
