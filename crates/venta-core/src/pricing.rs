//! # Pricing Module
//!
//! Pure arithmetic turning (unit price, quantity, discount chain, tax rate)
//! into the gross/discount/tax/total figures the cart screens render.
//!
//! ## Rounding Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ROUND LAST                                                             │
//! │                                                                         │
//! │  price × qty ──► discount chain (unrounded) ──► subtotal (unrounded)    │
//! │                                                      │                  │
//! │                                                      ▼                  │
//! │                              round2 applied ONCE, on final outputs      │
//! │                                                                         │
//! │  Rounding intermediate steps would compound the error across a chain:   │
//! │  each percentage works on the exact running amount instead.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::discount::DiscountChain;
use crate::types::CartItem;

// =============================================================================
// Rounding
// =============================================================================

/// Rounds to 2 decimal places (half away from zero).
///
/// Applied exactly once, to final outputs only.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Line Totals
// =============================================================================

/// The computed figures for a single cart line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTotals {
    /// `unit_price × quantity`, before any discount.
    pub total_gross: f64,

    /// Amount removed by the discount chain.
    pub discount_amount: f64,

    /// Gross after discounts, before tax.
    pub subtotal: f64,

    /// Tax on the discounted subtotal.
    pub tax: f64,

    /// `subtotal + tax`.
    pub total: f64,

    /// Effective per-unit price after the discount chain.
    pub final_unit_price: f64,
}

/// Computes the totals for one line.
///
/// ## Algorithm
/// 1. `total_gross = price × quantity`
/// 2. The discount chain is applied **in order** to both the running
///    subtotal and the running unit price, each step removing `p%` of the
///    running amount (stacked discounts compound multiplicatively)
/// 3. Only the final outputs are rounded to 2 decimals
///
/// ## Edge Case
/// When the chain removes nothing (empty chain, or the computed discount is
/// not strictly positive), `final_unit_price` reports the original
/// **unrounded** price, so a no-op chain cannot introduce floating-point
/// drift on the displayed unit price.
///
/// ## Example
/// ```rust
/// use venta_core::discount::DiscountChain;
/// use venta_core::pricing::calculate_totals;
///
/// let totals = calculate_totals(200.0, 3, &DiscountChain::parse("25"), 0.16);
/// assert_eq!(totals.total_gross, 600.0);
/// assert_eq!(totals.subtotal, 450.0);
/// assert_eq!(totals.discount_amount, 150.0);
/// assert_eq!(totals.tax, 72.0);
/// assert_eq!(totals.total, 522.0);
/// ```
pub fn calculate_totals(
    price: f64,
    quantity: u32,
    chain: &DiscountChain,
    tax_rate: f64,
) -> LineTotals {
    let total_gross = price * quantity as f64;
    let subtotal = chain.apply(total_gross);
    let discounted_unit = chain.apply(price);

    let discount_amount = round2(total_gross - subtotal);
    let tax = round2(subtotal * tax_rate);
    let total = round2(subtotal + tax);

    let final_unit_price = if discount_amount > 0.0 {
        round2(discounted_unit)
    } else {
        price
    };

    LineTotals {
        total_gross: round2(total_gross),
        discount_amount,
        subtotal: round2(subtotal),
        tax,
        total,
        final_unit_price,
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// Aggregated figures over every line of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub total_gross: f64,
    pub discount_amount: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Sums per-line totals across all items.
///
/// Each line is computed with [`calculate_totals`]; the sums are re-rounded
/// to absorb accumulated float dust.
pub fn order_totals(items: &[CartItem], tax_rate: f64) -> OrderTotals {
    let mut acc = OrderTotals::default();

    for item in items {
        let line = calculate_totals(item.unit_price, item.quantity, &item.discount_chain, tax_rate);
        acc.total_gross += line.total_gross;
        acc.discount_amount += line.discount_amount;
        acc.subtotal += line.subtotal;
        acc.tax += line.tax;
        acc.total += line.total;
    }

    OrderTotals {
        total_gross: round2(acc.total_gross),
        discount_amount: round2(acc.discount_amount),
        subtotal: round2(acc.subtotal),
        tax: round2(acc.tax),
        total: round2(acc.total),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compounding_law() {
        // two 10% discounts yield a combined 19%, not 20%
        let totals = calculate_totals(100.0, 1, &DiscountChain::parse("10+10"), 0.0);
        assert_eq!(totals.final_unit_price, 81.0);
        assert_eq!(totals.subtotal, 81.0);
        assert_eq!(totals.discount_amount, 19.0);
    }

    #[test]
    fn test_tax_law() {
        let totals = calculate_totals(200.0, 3, &DiscountChain::parse("25"), 0.16);
        assert_eq!(totals.total_gross, 600.0);
        assert_eq!(totals.subtotal, 450.0);
        assert_eq!(totals.discount_amount, 150.0);
        assert_eq!(totals.tax, 72.0);
        assert_eq!(totals.total, 522.0);
    }

    #[test]
    fn test_empty_chain_reports_original_unit_price() {
        // 10.1 is not exactly representable; the no-op path must hand back
        // the caller's price untouched instead of a re-rounded one
        let totals = calculate_totals(10.1, 4, &DiscountChain::none(), 0.16);
        assert_eq!(totals.final_unit_price, 10.1);
        assert_eq!(totals.discount_amount, 0.0);
        assert_eq!(totals.total_gross, 40.4);
    }

    #[test]
    fn test_intermediates_not_rounded() {
        // 33.33% then 50% on $9.99: rounding after the first step would
        // shift the final cent
        let chain = DiscountChain::parse("33.33+50");
        let totals = calculate_totals(9.99, 1, &chain, 0.0);
        // 9.99 × 0.6667 × 0.5 = 3.330...
        assert_eq!(totals.subtotal, 3.33);
        assert_eq!(totals.discount_amount, 6.66);
    }

    #[test]
    fn test_zero_quantity() {
        let totals = calculate_totals(50.0, 0, &DiscountChain::parse("10"), 0.16);
        assert_eq!(totals.total_gross, 0.0);
        assert_eq!(totals.discount_amount, 0.0);
        assert_eq!(totals.total, 0.0);
        // no positive discount materialized, so the original price shows
        assert_eq!(totals.final_unit_price, 50.0);
    }

    #[test]
    fn test_order_totals_aggregates_lines() {
        let items = vec![
            CartItem {
                id: "A".to_string(),
                description: "Article A".to_string(),
                unit_price: 200.0,
                available: 10,
                quantity: 3,
                discount_chain: DiscountChain::parse("25"),
                image_ref: None,
            },
            CartItem {
                id: "B".to_string(),
                description: "Article B".to_string(),
                unit_price: 100.0,
                available: 10,
                quantity: 1,
                discount_chain: DiscountChain::none(),
                image_ref: None,
            },
        ];

        let totals = order_totals(&items, 0.16);
        assert_eq!(totals.total_gross, 700.0);
        assert_eq!(totals.discount_amount, 150.0);
        assert_eq!(totals.subtotal, 550.0);
        assert_eq!(totals.tax, 88.0);
        assert_eq!(totals.total, 638.0);
    }

    #[test]
    fn test_order_totals_empty_cart() {
        assert_eq!(order_totals(&[], 0.16), OrderTotals::default());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(2.674), 2.67);
        assert_eq!(round2(-1.006), -1.01);
        assert_eq!(round2(72.000000000000004), 72.0);
    }
}
