//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.
//!
//! Amounts carry no currency: the domain tracks bare numbers that may be
//! zero or negative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Neg, Sub, SubAssign};
use thiserror::Error;

/// A monetary amount stored as cents (hundredths of the unit)
///
/// Using i64 cents avoids floating-point precision issues and supports
/// amounts up to approximately 92 quadrillion units in either direction.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

/// Error returned when a string cannot be parsed as an amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("invalid amount: {0}")]
    InvalidFormat(String),
}

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse an amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "10", "-3"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let cents = if let Some((whole, frac)) = rest.split_once('.') {
            let units: i64 = whole.parse().map_err(|_| invalid())?;

            // Pad or truncate the fractional part to 2 digits
            let frac_cents: i64 = match frac.len() {
                0 => 0,
                1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                _ => frac
                    .get(..2)
                    .ok_or_else(invalid)?
                    .parse()
                    .map_err(|_| invalid())?,
            };
            if frac_cents < 0 {
                return Err(invalid());
            }

            units * 100 + frac_cents
        } else {
            // Integer format - whole units
            rest.parse::<i64>().map_err(|_| invalid())? * 100
        };
        if cents < 0 {
            return Err(invalid());
        }

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Parse an amount, coercing anything unparsable to zero
    ///
    /// This is the input-boundary policy: a garbled amount becomes 0 rather
    /// than an error surfaced to the user.
    pub fn parse_or_zero(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|_| Self::zero())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Integer cents division, truncating toward zero. Used for averages.
impl Div<i64> for Money {
    type Output = Self;

    fn div(self, rhs: i64) -> Self {
        Self(self.0 / rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let amount = Money::from_cents(1050);
        assert_eq!(amount.cents(), 1050);
        assert_eq!(amount.units(), 10);
        assert_eq!(amount.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_cents(-50).to_string(), "-0.50");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::from_units(150).to_string(), "150.00");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Money::parse("10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("-10.50").unwrap(), Money::from_cents(-1050));
        assert_eq!(Money::parse("10.5").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("10.").unwrap(), Money::from_cents(1000));
        assert_eq!(Money::parse("10.509").unwrap(), Money::from_cents(1050));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(Money::parse("150").unwrap(), Money::from_units(150));
        assert_eq!(Money::parse(" -3 ").unwrap(), Money::from_units(-3));
        assert_eq!(Money::parse("0").unwrap(), Money::zero());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("12,50").is_err());
        assert!(Money::parse("1.-5").is_err());
    }

    #[test]
    fn test_parse_or_zero_coerces() {
        assert_eq!(Money::parse_or_zero("garbage"), Money::zero());
        assert_eq!(Money::parse_or_zero(""), Money::zero());
        assert_eq!(Money::parse_or_zero("12.34"), Money::from_cents(1234));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);
        assert_eq!(a + b, Money::from_cents(1250));
        assert_eq!(a - b, Money::from_cents(750));
        assert_eq!(-a, Money::from_cents(-1000));
        assert_eq!(a / 4, Money::from_cents(250));
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_units(100), Money::from_units(50)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::from_units(150));
    }
}
