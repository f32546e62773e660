//! Amount type for representing expense values
//!
//! Wraps an exact decimal so that sums never pick up floating-point error.
//! On disk an amount is a plain JSON number carrying exactly the digits it
//! was written with (e.g. `12.50`, `7`, `12.0`).
//!
//! Totals are built with `checked_add`; an overflowing sum is reported to the
//! caller instead of panicking.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An exact, currency-agnostic monetary amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Largest amount a single record may carry (one quadrillion)
    ///
    /// Far below the decimal ceiling of about 7.9e28, so totals over any
    /// realistic number of valid records stay representable.
    pub const MAX_RECORD: Amount =
        Amount(Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0));

    /// Wrap a decimal value
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Add two amounts, `None` on overflow
    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Sum amounts, `None` if any partial sum overflows
    pub fn checked_sum<I: IntoIterator<Item = Amount>>(amounts: I) -> Option<Amount> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, x| acc.checked_add(x))
    }

    /// Share of `total` this amount represents, as a percentage
    ///
    /// Falls back to floating point when the exact quotient is out of range,
    /// which only happens when stored data drives `total` close to zero.
    pub fn percentage_of(&self, total: Amount) -> f64 {
        if total.is_zero() {
            return 0.0;
        }
        let exact = self
            .0
            .checked_div(total.0)
            .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED));
        match exact {
            Some(percent) => percent.to_f64().unwrap_or(0.0),
            None => match (self.0.to_f64(), total.0.to_f64()) {
                (Some(part), Some(whole)) => part / whole * 100.0,
                _ => 0.0,
            },
        }
    }

    /// Parse an amount from user input
    ///
    /// Accepts "10.50", "10", "$10.50", "-3", "+3" and scientific forms like
    /// "1e3". At most one sign, ahead of any `$`. Sign is preserved;
    /// positivity is checked by the record, not here.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let digits = digits.strip_prefix('$').unwrap_or(digits);

        if digits.is_empty() || digits.starts_with(['-', '+']) {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        let value = Decimal::from_str(digits)
            .or_else(|_| Decimal::from_scientific(digits))
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl fmt::Display for Amount {
    /// Shows at least two fractional digits, more if the value carries them
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = self.0;
        if shown.scale() < 2 {
            shown.rescale(2);
        }
        f.pad(&shown.to_string())
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::arbitrary_precision::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::arbitrary_precision::deserialize(deserializer).map(Self)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountParseError {
    #[error("Invalid amount: '{0}'")]
    InvalidFormat(String),
}
