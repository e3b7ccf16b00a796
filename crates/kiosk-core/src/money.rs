//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart that sums `price * quantity` as floats drifts after enough     │
//! │  add/update/remove operations.                                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    ₱5.00 is stored as 500. Sums are exact for any operation sequence.  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kiosk_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let price = Money::from_cents(550); // ₱5.50
//!
//! // Or parse the backend's decimal string
//! let parsed: Money = "5.50".parse().unwrap();
//! assert_eq!(parsed, price);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: headroom for intermediate arithmetic, even though
///   catalog prices are never negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support, serialized as the raw centavo count
///
/// Every monetary value in the kiosk flows through this type: product
/// prices, cart line totals, and the receipt total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (pesos and centavos).
    ///
    /// ```rust
    /// use kiosk_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // ₱10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Money(major * 100 + minor)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (pesos) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// ```rust
    /// use kiosk_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(500); // ₱5.00
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 1500); // ₱15.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Error parsing a decimal money string from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid money value: {0:?}")]
pub struct ParseMoneyError(pub String);

/// Parses the backend's decimal representation (`"5"`, `"5.5"`, `"5.00"`).
///
/// The catalog API serializes prices as decimal strings. At most two
/// fraction digits are accepted; anything finer would silently lose
/// precision, so it is rejected instead.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (major_str, minor_str) = match s.split_once('.') {
            Some((m, f)) => (m, f),
            None => (s, ""),
        };

        if major_str.is_empty() || minor_str.len() > 2 {
            return Err(ParseMoneyError(s.to_string()));
        }

        let major: i64 = major_str
            .parse()
            .map_err(|_| ParseMoneyError(s.to_string()))?;
        if major < 0 {
            // Catalog prices are non-negative by contract
            return Err(ParseMoneyError(s.to_string()));
        }

        let minor: i64 = if minor_str.is_empty() {
            0
        } else if !minor_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseMoneyError(s.to_string()));
        } else {
            // "5.5" means 50 centavos, not 5
            let parsed: i64 = minor_str
                .parse()
                .map_err(|_| ParseMoneyError(s.to_string()))?;
            if minor_str.len() == 1 {
                parsed * 10
            } else {
                parsed
            }
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| ParseMoneyError(s.to_string()))?;
        Ok(Money::from_cents(cents))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display as `₱x.yy`, matching what the kiosk screens show.
///
/// This is for logging and receipts; the front-end handles its own
/// localized formatting from the raw centavo count.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₱{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "₱10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "₱5.00");
        assert_eq!(format!("{}", Money::from_cents(0)), "₱0.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-₱5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [150, 500, 1]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 651);
    }

    #[test]
    fn test_parse_whole_and_fraction() {
        assert_eq!("5".parse::<Money>().unwrap().cents(), 500);
        assert_eq!("5.5".parse::<Money>().unwrap().cents(), 550);
        assert_eq!("5.00".parse::<Money>().unwrap().cents(), 500);
        assert_eq!("1234.99".parse::<Money>().unwrap().cents(), 123499);
        assert_eq!("0.01".parse::<Money>().unwrap().cents(), 1);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
        assert!("5.001".parse::<Money>().is_err());
        assert!("5.x".parse::<Money>().is_err());
        assert!("-5.00".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_rejects_overflowing_major() {
        // i64::MAX is 9223372036854775807; scaling to centavos overflows.
        assert!("9223372036854775807".parse::<Money>().is_err());
        assert!("92233720368547758.08".parse::<Money>().is_err());
        // The largest representable value still parses.
        assert_eq!(
            "92233720368547758.07".parse::<Money>().unwrap().cents(),
            i64::MAX
        );
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    }
}
