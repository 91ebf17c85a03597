//! # Money Module
//!
//! Provides the `Amount` type for handling monetary values safely.
//!
//! ## Why Integer Minor Units?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Greedy breakdown with floats:                                          │
//! │    73.50 % 50  = 23.5                                                   │
//! │    23.5  % 20  = 3.5                                                    │
//! │    ...                                                                  │
//! │    0.3   % 0.2 = 0.09999999999999998  ❌ one cent lost!                 │
//! │                                                                         │
//! │  Rounding to 2 digits after each step papers over it, but the error    │
//! │  is already there before the rounding happens.                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    30 cents / 20 cents = 1 remainder 10 cents                          │
//! │    Exact, every time. No rounding step exists.                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Amount;
//!
//! // Create from cents (preferred)
//! let fifty = Amount::from_cents(5000); // 50.00
//!
//! // Or parse cashier input
//! let input: Amount = "73,50".parse().unwrap();
//! assert_eq!(input.cents(), 7350);
//!
//! // How many fifties fit?
//! assert_eq!(input.whole_multiples_of(fifty), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::parse_amount;
use crate::MINOR_PER_MAJOR;

// =============================================================================
// Amount Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for EUR).
///
/// ## Design Decisions
/// - **i64 (signed)**: the Denominator treats amounts ≤ 0 as "nothing to
///   break down", so a negative value must be representable to be rejected
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as a bare integer**: `7350` on the wire means 73.50
///
/// ## Where Amount is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cashier input "73,50" ──► Amount(7350) ──► breakdown()                 │
/// │                                                 │                       │
/// │  DenominationSet [Amount(20000), ... Amount(1)] ┘                       │
/// │                                                                         │
/// │  BreakdownEntry.denomination ──► DifferenceEntry.denomination          │
/// │                                                                         │
/// │  Displayed as "73,50" only at the very edge                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Amount(i64);

impl Amount {
    /// Creates an amount from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Amount;
    ///
    /// let coin = Amount::from_cents(50); // 0.50
    /// assert_eq!(coin.cents(), 50);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Amount(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (euro) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit (cent) portion, always 0-99.
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is below zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// How many whole `unit`s fit into this amount (floor division).
    ///
    /// Returns 0 when either side is not positive.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Amount;
    ///
    /// let remaining = Amount::from_cents(350);
    /// assert_eq!(remaining.whole_multiples_of(Amount::from_cents(100)), 3);
    /// assert_eq!(remaining.whole_multiples_of(Amount::from_cents(500)), 0);
    /// ```
    #[inline]
    pub const fn whole_multiples_of(&self, unit: Amount) -> u64 {
        if self.0 <= 0 || unit.0 <= 0 {
            return 0;
        }
        (self.0 / unit.0) as u64
    }

    /// Multiplies by a piece count.
    #[inline]
    pub const fn times(&self, count: u64) -> Self {
        Amount(self.0 * count as i64)
    }

    /// Formats with a custom decimal separator ("73,50" for German tills).
    ///
    /// ## Note
    /// This is the only localization the core does. Thousands grouping and
    /// currency placement belong to the front end.
    pub fn to_string_with_separator(&self, separator: char) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}{:02}",
            sign,
            self.major().abs(),
            separator,
            self.minor_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain `major.minor` rendering, e.g. `73.50`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_separator('.'))
    }
}

/// Parses cashier input; see [`parse_amount`] for the accepted format.
impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_amount(s)
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a piece count.
impl Mul<u64> for Amount {
    type Output = Self;

    #[inline]
    fn mul(self, count: u64) -> Self {
        self.times(count)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
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
        let amount = Amount::from_cents(7350);
        assert_eq!(amount.cents(), 7350);
        assert_eq!(amount.major(), 73);
        assert_eq!(amount.minor_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::from_cents(7350).to_string(), "73.50");
        assert_eq!(Amount::from_cents(2).to_string(), "0.02");
        assert_eq!(Amount::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Amount::zero().to_string(), "0.00");
    }

    #[test]
    fn test_display_with_separator() {
        assert_eq!(Amount::from_cents(7350).to_string_with_separator(','), "73,50");
        assert_eq!(Amount::from_cents(20000).to_string_with_separator(','), "200,00");
    }

    #[test]
    fn test_whole_multiples_of() {
        let remaining = Amount::from_cents(2350);
        assert_eq!(remaining.whole_multiples_of(Amount::from_cents(2000)), 1);
        assert_eq!(remaining.whole_multiples_of(Amount::from_cents(5000)), 0);
        assert_eq!(remaining.whole_multiples_of(Amount::from_cents(1)), 2350);

        // Never divides through zero or negatives
        assert_eq!(remaining.whole_multiples_of(Amount::zero()), 0);
        assert_eq!(Amount::from_cents(-500).whole_multiples_of(Amount::from_cents(100)), 0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::from_cents(1000);
        let b = Amount::from_cents(250);

        assert_eq!((a + b).cents(), 1250);
        assert_eq!((a - b).cents(), 750);
        assert_eq!((b * 3).cents(), 750);

        let total: Amount = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 1500);
    }

    #[test]
    fn test_parse_via_from_str() {
        let amount: Amount = "73,50".parse().unwrap();
        assert_eq!(amount, Amount::from_cents(7350));
        assert!("-1".parse::<Amount>().is_err());
    }

    #[test]
    fn test_serializes_as_minor_units() {
        let json = serde_json::to_string(&Amount::from_cents(7350)).unwrap();
        assert_eq!(json, "7350");

        let back: Amount = serde_json::from_str("50").unwrap();
        assert_eq!(back, Amount::from_cents(50));
    }

    /// Critical test: the float trap that integer cents avoid.
    #[test]
    fn test_no_float_residue() {
        let thirty = Amount::from_cents(30);
        let twenty = Amount::from_cents(20);
        let count = thirty.whole_multiples_of(twenty);
        let rest = thirty - twenty * count;
        assert_eq!(rest.cents(), 10);
    }
}
