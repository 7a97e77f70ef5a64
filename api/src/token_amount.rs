//! A token amount held in base units and shown in whole tokens.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Decimal places assumed for every token transfer.
///
/// The backend does not report a token's decimals, so amounts are always
/// scaled by 10^6.
pub const TOKEN_DECIMALS: u32 = 6;

/// An error that can occur when parsing a base-unit string into a `TokenAmount`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseTokenAmountError {
    /// The string is not a plain integer (e.g. "", "1.5", "0x10").
    #[error("invalid token amount format")]
    InvalidFormat,
    /// The integer does not fit in 128 bits.
    #[error("token amount out of range")]
    OutOfRange,
}

/// Represents a token value.
///
/// Internally the amount is stored in base units so that no precision is
/// lost. The `Display` implementation divides by 10^[`TOKEN_DECIMALS`] and
/// trims trailing fractional zeros, e.g. `5000000` displays as `5` and
/// `1500000` as `1.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TokenAmount {
    base_units: i128,
}

impl TokenAmount {
    pub fn from_base_units(base_units: i128) -> Self {
        Self { base_units }
    }

    pub fn base_units(&self) -> i128 {
        self.base_units
    }
}

impl FromStr for TokenAmount {
    type Err = ParseTokenAmountError;

    /// Parses a decimal integer string of base units, as sent by the backend.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseTokenAmountError::InvalidFormat);
        }

        s.parse::<i128>()
            .map(Self::from_base_units)
            .map_err(|_| ParseTokenAmountError::OutOfRange)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divisor = 10_u128.pow(TOKEN_DECIMALS);
        let magnitude = self.base_units.unsigned_abs();
        let whole = magnitude / divisor;
        let fraction = magnitude % divisor;
        let sign = if self.base_units < 0 { "-" } else { "" };

        if fraction == 0 {
            return write!(f, "{sign}{whole}");
        }

        let fraction = format!("{:0width$}", fraction, width = TOKEN_DECIMALS as usize);
        write!(f, "{sign}{whole}.{}", fraction.trim_end_matches('0'))
    }
}
