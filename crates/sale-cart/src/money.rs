//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront
//! prices everything in a single currency, so there is no currency tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// Currency symbol used for display.
pub const CURRENCY_SYMBOL: &str = "$";

/// A monetary value in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a whole-dollar amount.
    pub const fn dollars(amount: i64) -> Self {
        Self::new(amount.saturating_mul(100))
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use sale_cart::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Like [`Money::from_decimal`], but `None` when the amount is not finite
    /// or its cents do not fit in an `i64`.
    pub fn checked_from_decimal(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if !cents.is_finite() || cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }
        Some(Self::new(cents as i64))
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Add, saturating at the numeric bounds.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }

    /// Subtract, saturating at the numeric bounds.
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_sub(other.amount_cents))
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_mul(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor))
    }

    /// Calculate a whole-number percentage of this amount.
    ///
    /// Rounds half away from zero to the nearest cent.
    pub fn percentage(&self, percent: u32) -> Money {
        let scaled = i128::from(self.amount_cents) * i128::from(percent);
        let rounded = if scaled >= 0 {
            (scaled + 50) / 100
        } else {
            (scaled - 50) / 100
        };
        Money::new(rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }

    /// Clamp negative values to zero.
    pub fn non_negative(&self) -> Money {
        Money::new(self.amount_cents.max(0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        self.saturating_sub(other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.saturating_mul(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).amount_cents, 4999);
        assert_eq!(Money::from_decimal(0.1 + 0.2).amount_cents, 30);
        assert_eq!(Money::from_decimal(5.0), Money::dollars(5));
    }

    #[test]
    fn test_checked_from_decimal() {
        assert_eq!(Money::checked_from_decimal(24.99), Some(Money::new(2499)));
        assert_eq!(Money::checked_from_decimal(-3.5), Some(Money::new(-350)));
        assert_eq!(Money::checked_from_decimal(1e30), None);
        assert_eq!(Money::checked_from_decimal(-1e30), None);
        assert_eq!(Money::checked_from_decimal(f64::NAN), None);
        assert_eq!(Money::checked_from_decimal(f64::INFINITY), None);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).display(), "$49.99");
        assert_eq!(Money::new(5).display(), "$0.05");
        assert_eq!(Money::zero().display_amount(), "0.00");
        assert_eq!(Money::new(-250).display_amount(), "-2.50");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(300);
        assert_eq!((a + b).amount_cents, 1300);
        assert_eq!((a - b).amount_cents, 700);
        assert_eq!((a * 3).amount_cents, 3000);
    }

    #[test]
    fn test_money_saturates() {
        let big = Money::new(i64::MAX);
        assert_eq!((big + Money::new(1)).amount_cents, i64::MAX);
        assert_eq!((big * 2).amount_cents, i64::MAX);
        assert_eq!(Money::dollars(i64::MAX).amount_cents, i64::MAX);
    }

    #[test]
    fn test_money_percentage() {
        assert_eq!(Money::dollars(250).percentage(20), Money::dollars(50));
        assert_eq!(Money::dollars(100).percentage(10), Money::dollars(10));
        // 10% of $0.05 is half a cent, rounds up
        assert_eq!(Money::new(5).percentage(10).amount_cents, 1);
        assert_eq!(Money::new(4).percentage(10).amount_cents, 0);
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::new(100), Money::new(250), Money::new(50)];
        let total: Money = values.iter().sum();
        assert_eq!(total.amount_cents, 400);
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(Money::new(-10).non_negative(), Money::zero());
        assert_eq!(Money::new(10).non_negative(), Money::new(10));
    }
}
