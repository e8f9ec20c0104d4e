//! # Money Module
//!
//! Provides the `Money` type for handling menu prices and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    7.50 × 0.85 = 6.3749999999999991  ❌ rounds DOWN to 6.37            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    750 cents × 8500 bps = 6_375_000                                     │
//! │    (6_375_000 + 5_000) / 10_000 = 638 cents  ✅ 6.38                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use burger_core::money::Money;
//! use burger_core::types::DiscountRate;
//!
//! let sandwich = Money::from_cents(500); // $5.00
//! let drink = Money::from_cents(250);    // $2.50
//!
//! let subtotal = sandwich + drink;
//! let total = subtotal.apply_discount(DiscountRate::from_bps(1500)); // 15% off
//! assert_eq!(total.cents(), 638);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use ts_rs::TS;

use crate::types::DiscountRate;

/// Basis points in one whole (100%).
const BPS_SCALE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Item.price_cents ──► Order subtotal ──► bundle discount ──► Order total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use burger_core::money::Money;
    ///
    /// let price = Money::from_cents(450); // Represents $4.50
    /// assert_eq!(price.cents(), 450);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use burger_core::money::Money;
    ///
    /// let price = Money::from_major_minor(7, 0); // $7.00
    /// assert_eq!(price.cents(), 700);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Returns this amount reduced by a percentage discount.
    ///
    /// The discounted amount is rounded to whole cents, half away from zero:
    /// `round(amount × (10000 - bps) / 10000)`.
    ///
    /// Rounding the *remaining* amount (rather than the discount itself)
    /// is what makes `$7.50` at 15% off come out as `$6.38`.
    ///
    /// ## Example
    /// ```rust
    /// use burger_core::money::Money;
    /// use burger_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(950);
    /// let total = subtotal.apply_discount(DiscountRate::from_bps(2000)); // 20% off
    /// assert_eq!(total.cents(), 760);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        let keep_bps = BPS_SCALE - i128::from(rate.bps());
        Money::from_cents(round_half_away_from_zero(self.0 as i128 * keep_bps, BPS_SCALE))
    }
}

/// Integer division of `numerator / denominator` rounded half away from zero.
///
/// `denominator` must be positive.
fn round_half_away_from_zero(numerator: i128, denominator: i128) -> i64 {
    let half = denominator / 2;
    let rounded = if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        (numerator - half) / denominator
    };
    rounded as i64
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-oriented display, e.g. `$6.38`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Lets slot prices be summed straight off an iterator.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
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
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(4, 50).cents(), 450);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(638)), "$6.38");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(500);
        let b = Money::from_cents(250);

        assert_eq!((a + b).cents(), 750);
        assert_eq!((a - b).cents(), 250);

        let total: Money = [a, b, Money::from_cents(200)].into_iter().sum();
        assert_eq!(total.cents(), 950);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_discount_rounds_half_away_from_zero() {
        // $7.50 at 15% off = $6.375 → $6.38
        let total = Money::from_cents(750).apply_discount(DiscountRate::from_bps(1500));
        assert_eq!(total.cents(), 638);
    }

    #[test]
    fn test_discount_exact_values() {
        assert_eq!(
            Money::from_cents(950).apply_discount(DiscountRate::from_bps(2000)).cents(),
            760
        );
        assert_eq!(
            Money::from_cents(700).apply_discount(DiscountRate::from_bps(1000)).cents(),
            630
        );
    }

    #[test]
    fn test_zero_discount_is_identity() {
        let amount = Money::from_cents(1234);
        assert_eq!(amount.apply_discount(DiscountRate::zero()), amount);
    }

    #[test]
    fn test_rounding_helper_negative_values() {
        assert_eq!(round_half_away_from_zero(-6_375_000, 10_000), -638);
        assert_eq!(round_half_away_from_zero(-6_374_999, 10_000), -637);
        assert_eq!(round_half_away_from_zero(6_374_999, 10_000), 637);
    }
}
