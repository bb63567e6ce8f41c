//! Monetary amounts in Philippine pesos, backed by decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in Philippine pesos.
///
/// Wraps [`Decimal`] so cart and order arithmetic stays exact; rounding to
/// two fraction digits happens only when formatting for display.
///
/// Serializes as a decimal string (e.g., `"900.00"`) so stored documents
/// never lose precision to floating point.
///
/// # Example
///
/// ```rust
/// use acel_core::Money;
///
/// let subtotal = Money::from_pesos(500).times(2);
/// assert_eq!(subtotal, Money::from_pesos(1000));
/// assert_eq!(subtotal.to_string(), "₱1000.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Money(#[serde(with = "rust_decimal::serde::str")] Decimal);

impl Money {
    /// Zero pesos.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a money value from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a money value from a whole number of pesos.
    #[must_use]
    pub fn from_pesos(pesos: i64) -> Self {
        Self(Decimal::from(pesos))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Take a percentage of this amount, e.g., `percent(10.into())` is 10%.
    #[must_use]
    pub fn percent(self, percentage: Decimal) -> Self {
        Self(self.0 * percentage / Decimal::ONE_HUNDRED)
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₱{:.2}", self.0)
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

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_peso_sign_and_two_digits() {
        assert_eq!(Money::from_pesos(1000).to_string(), "₱1000.00");
        assert_eq!(Money::new(Decimal::new(1234, 2)).to_string(), "₱12.34");
        assert_eq!(Money::ZERO.to_string(), "₱0.00");
    }

    #[test]
    fn test_times_scales_by_quantity() {
        assert_eq!(Money::from_pesos(500).times(2), Money::from_pesos(1000));
        assert_eq!(Money::from_pesos(500).times(0), Money::ZERO);
    }

    #[test]
    fn test_percent() {
        let subtotal = Money::from_pesos(1000);
        assert_eq!(subtotal.percent(Decimal::from(10)), Money::from_pesos(100));
        assert_eq!(subtotal.percent(Decimal::ZERO), Money::ZERO);
    }

    #[test]
    fn test_sum_over_lines() {
        let total: Money = [Money::from_pesos(500), Money::from_pesos(400)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_pesos(900));
    }

    #[test]
    fn test_equality_ignores_scale() {
        // 900 and 900.00 are the same amount at different decimal scales
        assert_eq!(Money::from_pesos(900), Money::new(Decimal::new(90000, 2)));
    }

    #[test]
    fn test_serializes_as_decimal_string() {
        let json = serde_json::to_string(&Money::from_pesos(500)).unwrap();
        assert_eq!(json, "\"500\"");

        let parsed: Money = serde_json::from_str("\"900.00\"").unwrap();
        assert_eq!(parsed, Money::from_pesos(900));
    }
}
