//! Pricing: subtotals, voucher discounts, and the final quote.
//!
//! Pricing is a pure calculation over cart lines. It reads no documents and
//! writes none, so the same lines and voucher always produce the same
//! quote.

use acel_core::Money;
use rust_decimal::Decimal;

use crate::types::CartLine;

/// Voucher codes honored at checkout, with their discount percentage.
const VOUCHERS: &[(&str, u32)] = &[("ACEL", 10)];

/// A priced-out cart: what checkout will charge.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Sum of line totals before any discount.
    pub subtotal: Money,
    /// Discount percentage applied, zero when no voucher matched.
    pub discount_percent: Decimal,
    /// Peso amount taken off the subtotal.
    pub discount_amount: Money,
    /// Subtotal minus discount.
    pub total: Money,
    /// Whether the given voucher code was recognized.
    pub voucher_accepted: bool,
}

/// Look up the discount percentage for a voucher code.
///
/// Codes match case-insensitively, so `acel` and `ACEL` are the same
/// voucher.
#[must_use]
pub fn resolve_voucher(code: &str) -> Option<u32> {
    VOUCHERS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map(|(_, percent)| *percent)
}

/// Price a set of lines under an optional voucher code.
///
/// A missing, blank, or unrecognized code prices the cart without a
/// discount and reports `voucher_accepted: false`; it is never an error
/// here. Rejecting bad codes loudly is the session's job.
#[must_use]
pub fn price(lines: &[CartLine], voucher: Option<&str>) -> Quote {
    let subtotal: Money = lines.iter().map(CartLine::line_total).sum();

    let percent = voucher
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .and_then(resolve_voucher);

    percent.map_or_else(
        || Quote {
            subtotal,
            discount_percent: Decimal::ZERO,
            discount_amount: Money::ZERO,
            total: subtotal,
            voucher_accepted: false,
        },
        |percent| {
            let discount_percent = Decimal::from(percent);
            let discount_amount = subtotal.percent(discount_percent);
            Quote {
                subtotal,
                discount_percent,
                discount_amount,
                total: subtotal - discount_amount,
                voucher_accepted: true,
            }
        },
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use acel_core::{ProductId, Variant};

    use super::*;
    use crate::types::CartLine;

    fn tee_times_two() -> Vec<CartLine> {
        vec![CartLine {
            product_id: ProductId::new(3),
            name: "Classic Tee".to_owned(),
            unit_price: Money::from_pesos(500),
            quantity: 2,
            variant: Some(Variant::new("Black")),
        }]
    }

    #[test]
    fn test_two_tees_with_voucher_come_to_nine_hundred() {
        let quote = price(&tee_times_two(), Some("ACEL"));
        assert_eq!(quote.subtotal, Money::from_pesos(1000));
        assert_eq!(quote.discount_percent, Decimal::from(10));
        assert_eq!(quote.discount_amount, Money::from_pesos(100));
        assert_eq!(quote.total, Money::from_pesos(900));
        assert!(quote.voucher_accepted);
        assert_eq!(quote.total.to_string(), "₱900.00");
    }

    #[test]
    fn test_voucher_codes_match_case_insensitively() {
        for code in ["acel", "AceL", "ACEL"] {
            let quote = price(&tee_times_two(), Some(code));
            assert!(quote.voucher_accepted, "{code} should be accepted");
            assert_eq!(quote.total, Money::from_pesos(900));
        }
    }

    #[test]
    fn test_unknown_voucher_prices_without_discount() {
        let quote = price(&tee_times_two(), Some("SAVE50"));
        assert!(!quote.voucher_accepted);
        assert_eq!(quote.discount_amount, Money::ZERO);
        assert_eq!(quote.total, Money::from_pesos(1000));
    }

    #[test]
    fn test_blank_voucher_is_no_voucher() {
        let quote = price(&tee_times_two(), Some("   "));
        assert!(!quote.voucher_accepted);
        assert_eq!(quote.total, quote.subtotal);

        let quote = price(&tee_times_two(), None);
        assert!(!quote.voucher_accepted);
    }

    #[test]
    fn test_empty_cart_prices_to_zero() {
        let quote = price(&[], Some("ACEL"));
        assert_eq!(quote.subtotal, Money::ZERO);
        assert_eq!(quote.total, Money::ZERO);
        assert_eq!(quote.discount_amount, Money::ZERO);
    }

    #[test]
    fn test_pricing_is_repeatable() {
        let lines = tee_times_two();
        assert_eq!(price(&lines, Some("ACEL")), price(&lines, Some("ACEL")));
    }
}
