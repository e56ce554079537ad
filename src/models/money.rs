//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (hundredths of the major
//! currency unit) as an i64 to avoid floating-point precision issues.
//! The type is currency-agnostic; pairing an amount with a [`Currency`]
//! for display happens in the engine's formatting layer.
//!
//! [`Currency`]: super::currency::Currency

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as minor units (hundredths of the major unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use trip_ledger::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole major units
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole major-unit portion (truncated toward zero)
    pub const fn major_part(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor-unit portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Round to the nearest whole major unit, halves away from zero
    ///
    /// Used for currencies rendered without a fractional part.
    pub const fn round_to_major(&self) -> i64 {
        let rounded = (self.0.abs() + 50) / 100;
        if self.0 < 0 {
            -rounded
        } else {
            rounded
        }
    }

    /// Divide evenly across `parts`, rounding to the nearest minor unit
    ///
    /// Halves round away from zero. `parts` must be non-zero; callers
    /// guard against zero-length divisions.
    pub fn divide_evenly(&self, parts: i64) -> Self {
        let numerator = self.0.abs() as i128 * 2 + parts.abs() as i128;
        let quotient = (numerator / (parts.abs() as i128 * 2)) as i64;
        if (self.0 < 0) != (parts < 0) {
            Self(-quotient)
        } else {
            Self(quotient)
        }
    }

    /// Parse a money amount from a decimal string
    ///
    /// Accepts formats: "10.50", "-10.50", "10", "10.5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let minor = if let Some((major_str, minor_str)) = s.split_once('.') {
            let major: i64 = major_str
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate the fractional part to 2 digits
            let minor: i64 = match minor_str.len() {
                0 => 0,
                1 => {
                    minor_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => minor_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            major * 100 + minor
        } else {
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -minor } else { minor }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.major_part().abs(), self.minor_part())
        } else {
            write!(f, "{}.{:02}", self.major_part(), self.minor_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor(), 1050);
        assert_eq!(m.major_part(), 10);
        assert_eq!(m.minor_part(), 50);
    }

    #[test]
    fn test_from_major() {
        let m = Money::from_major(10);
        assert_eq!(m.minor(), 1000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_minor(0)), "0.00");
        assert_eq!(format!("{}", Money::from_minor(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_minor(5)), "0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((-a).minor(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().minor(), -1050);
        assert_eq!(Money::parse("10").unwrap().minor(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().minor(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().minor(), 5);
        assert!(Money::parse("ten").is_err());
    }

    #[test]
    fn test_round_to_major() {
        assert_eq!(Money::from_minor(123450).round_to_major(), 1235);
        assert_eq!(Money::from_minor(123449).round_to_major(), 1234);
        assert_eq!(Money::from_minor(-123450).round_to_major(), -1235);
        assert_eq!(Money::from_minor(50).round_to_major(), 1);
    }

    #[test]
    fn test_divide_evenly() {
        assert_eq!(Money::from_minor(1000).divide_evenly(4).minor(), 250);
        // 1000 / 3 = 333.33..., rounds to 333
        assert_eq!(Money::from_minor(1000).divide_evenly(3).minor(), 333);
        // 100 / 8 = 12.5, half rounds away from zero
        assert_eq!(Money::from_minor(100).divide_evenly(8).minor(), 13);
        assert_eq!(Money::from_minor(-100).divide_evenly(8).minor(), -13);
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);
        let c = Money::from_minor(1000);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, c);
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_minor(100).is_positive());
        assert!(Money::from_minor(-100).is_negative());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_minor(100),
            Money::from_minor(200),
            Money::from_minor(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.minor(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}
