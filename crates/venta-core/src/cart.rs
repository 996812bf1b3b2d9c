//! # Cart State
//!
//! The cart's unit of persistence and every pure mutation over it.
//!
//! ## Mutation Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartState Operations                                 │
//! │                                                                         │
//! │  UI Action                Operation                Effect               │
//! │  ─────────────            ─────────────            ─────────────        │
//! │  Tap article       ─────► add_item()        ─────► merge or insert      │
//! │  Tap +             ─────► increase()        ─────► clamp to available   │
//! │  Tap −             ─────► decrease()        ─────► 0 removes the line   │
//! │  Swipe delete      ─────► remove_item()     ─────► unconditional        │
//! │  Discard order     ─────► clear_order()     ─────► items only           │
//! │  Currency toggle   ─────► set_display_currency()   presentation only    │
//! │  Catalog refresh   ─────► sync_with_products()     clamp/drop + rates   │
//! │                                                                         │
//! │  No operation fails: quantities clamp, unknown SKUs are no-ops.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persisted Shape
//! One JSON document, camelCase keys, every field defaulted — a document
//! written by an older build (or missing fields entirely) still loads.

use serde::{Deserialize, Serialize};

use crate::pricing::{order_totals, OrderTotals};
use crate::reconcile::reconcile;
use crate::types::{CartItem, CatalogEntry, ExchangeRate};
use crate::validation::validate_sku;

/// The full client-held order state.
///
/// ## Invariants
/// - Lines are unique by SKU `id`
/// - Every line satisfies `0 < quantity <= available`
/// - `exchange_rate` and `tax_rate` are only replaced wholesale, by
///   [`CartState::sync_with_products`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    /// Cart lines, in insertion order.
    #[serde(default)]
    pub items: Vec<CartItem>,

    /// Last known base → secondary rate; absent until the first refresh.
    #[serde(default)]
    pub exchange_rate: Option<ExchangeRate>,

    /// Tax fraction applied to discounted subtotals (0.16 = 16%).
    #[serde(default)]
    pub tax_rate: f64,

    /// Whether totals are presented in the secondary currency.
    #[serde(default)]
    pub display_in_secondary_currency: bool,
}

impl CartState {
    /// An empty cart with the given default tax rate.
    pub fn new(tax_rate: f64) -> Self {
        CartState {
            tax_rate,
            ..CartState::default()
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds `qty` units of an article, merging with an existing line.
    ///
    /// ## Behavior
    /// - Already in cart: quantity becomes `min(existing + qty, available)`;
    ///   the existing discount chain is kept unless the incoming item
    ///   carries a non-empty one, which replaces it
    /// - Not in cart: inserted with `quantity = min(qty, available)`; if the
    ///   clamp lands on 0 (sold-out article) no line is created
    ///
    /// `item.quantity` is ignored; `qty` is the requested amount.
    pub fn add_item(&mut self, item: CartItem, qty: u32) {
        if validate_sku(&item.id).is_err() {
            return;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(qty).min(existing.available);
            if !item.discount_chain.is_empty() {
                existing.discount_chain = item.discount_chain;
            }
            return;
        }

        let quantity = qty.min(item.available);
        if quantity == 0 {
            return;
        }
        self.items.push(CartItem { quantity, ..item });
    }

    /// Increases a line's quantity, clamped to its availability.
    ///
    /// Unknown ids are silent no-ops.
    pub fn increase(&mut self, id: &str, by: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = item.quantity.saturating_add(by).min(item.available);
        }
    }

    /// Decreases a line's quantity; reaching 0 removes the line entirely.
    ///
    /// Unknown ids are silent no-ops.
    pub fn decrease(&mut self, id: &str, by: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = item.quantity.saturating_sub(by);
            if item.quantity == 0 {
                self.items.retain(|i| i.id != id);
            }
        }
    }

    /// Removes a line unconditionally; absent ids are not an error.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Empties the cart. Exchange rate, tax rate, and the currency toggle
    /// are untouched.
    pub fn clear_order(&mut self) {
        self.items.clear();
    }

    /// Toggles presentation currency. Never mutates amounts.
    pub fn set_display_currency(&mut self, in_secondary: bool) {
        self.display_in_secondary_currency = in_secondary;
    }

    /// Applies a fresh catalog snapshot: lines are reconciled (clamped or
    /// dropped, see [`reconcile`]) and the exchange rate and tax rate are
    /// replaced atomically alongside.
    ///
    /// Idempotent: applying the same snapshot twice changes nothing further.
    pub fn sync_with_products(
        &mut self,
        catalog: &[CatalogEntry],
        exchange_rate: ExchangeRate,
        tax_rate: f64,
    ) {
        self.items = reconcile(&self.items, catalog);
        self.exchange_rate = Some(exchange_rate);
        self.tax_rate = tax_rate;
    }

    // =========================================================================
    // Selectors
    // =========================================================================

    /// Aggregated totals over every line at the cart's tax rate.
    pub fn totals(&self) -> OrderTotals {
        order_totals(&self.items, self.tax_rate)
    }

    /// Looks up a line by SKU.
    pub fn find(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total units reserved across all lines.
    pub fn total_units(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// True when no lines are present.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::DiscountChain;
    use chrono::Utc;

    fn item(id: &str, price: f64, available: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            description: format!("Article {}", id),
            unit_price: price,
            available,
            quantity: 0,
            discount_chain: DiscountChain::none(),
            image_ref: None,
        }
    }

    fn rate(multiplier: f64) -> ExchangeRate {
        ExchangeRate {
            rate: multiplier,
            currency_code: "VES".to_string(),
            as_of: Utc::now(),
        }
    }

    fn assert_invariants(cart: &CartState) {
        for line in &cart.items {
            assert!(line.quantity > 0, "zero-quantity line retained: {}", line.id);
            assert!(
                line.quantity <= line.available,
                "quantity above availability: {}",
                line.id
            );
        }
        let mut ids: Vec<_> = cart.items.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cart.items.len(), "duplicate SKU lines");
    }

    #[test]
    fn test_add_clamps_to_availability() {
        let mut cart = CartState::new(0.16);
        cart.add_item(item("A", 50.0, 5), 3);
        cart.add_item(item("A", 50.0, 5), 10);

        assert_eq!(cart.find("A").unwrap().quantity, 5);
        assert_invariants(&cart);
    }

    #[test]
    fn test_add_sold_out_article_creates_no_line() {
        let mut cart = CartState::new(0.16);
        cart.add_item(item("A", 50.0, 0), 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_merge_keeps_discount_unless_supplied() {
        let mut cart = CartState::new(0.16);

        let mut first = item("A", 50.0, 10);
        first.discount_chain = DiscountChain::parse("5+10");
        cart.add_item(first, 1);

        // empty incoming chain = not supplied, existing chain survives
        cart.add_item(item("A", 50.0, 10), 1);
        assert_eq!(
            cart.find("A").unwrap().discount_chain,
            DiscountChain::parse("5+10")
        );

        // a supplied chain replaces it
        let mut replacement = item("A", 50.0, 10);
        replacement.discount_chain = DiscountChain::parse("20");
        cart.add_item(replacement, 1);
        assert_eq!(
            cart.find("A").unwrap().discount_chain,
            DiscountChain::parse("20")
        );
        assert_eq!(cart.find("A").unwrap().quantity, 3);
    }

    #[test]
    fn test_add_ignores_blank_sku() {
        let mut cart = CartState::new(0.16);
        cart.add_item(item("  ", 50.0, 5), 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increase_clamps() {
        let mut cart = CartState::new(0.16);
        cart.add_item(item("A", 50.0, 5), 4);
        cart.increase("A", 3);
        assert_eq!(cart.find("A").unwrap().quantity, 5);

        cart.increase("missing", 1); // silent
        assert_invariants(&cart);
    }

    #[test]
    fn test_decrease_to_zero_removes_line() {
        let mut cart = CartState::new(0.16);
        cart.add_item(item("A", 50.0, 5), 2);
        cart.decrease("A", 1);
        assert_eq!(cart.find("A").unwrap().quantity, 1);

        cart.decrease("A", 1);
        assert!(cart.find("A").is_none());
        assert_invariants(&cart);
    }

    #[test]
    fn test_remove_absent_is_silent() {
        let mut cart = CartState::new(0.16);
        cart.remove_item("ghost");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_order_keeps_rates_and_toggle() {
        let mut cart = CartState::new(0.16);
        cart.add_item(item("A", 50.0, 5), 2);
        cart.sync_with_products(
            &[CatalogEntry {
                id: "A".to_string(),
                description: "Article A".to_string(),
                unit_price: 50.0,
                available: 5,
                image_ref: None,
            }],
            rate(36.5),
            0.08,
        );
        cart.set_display_currency(true);

        cart.clear_order();
        assert!(cart.is_empty());
        assert_eq!(cart.tax_rate, 0.08);
        assert!(cart.display_in_secondary_currency);
        assert!(cart.exchange_rate.is_some());
    }

    #[test]
    fn test_sync_replaces_rates_atomically() {
        let mut cart = CartState::new(0.16);
        cart.add_item(item("A", 50.0, 5), 4);

        let catalog = vec![CatalogEntry {
            id: "A".to_string(),
            description: "Article A".to_string(),
            unit_price: 60.0,
            available: 2,
            image_ref: None,
        }];
        cart.sync_with_products(&catalog, rate(40.0), 0.12);

        let line = cart.find("A").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price, 60.0);
        assert_eq!(cart.tax_rate, 0.12);
        assert_eq!(cart.exchange_rate.as_ref().unwrap().rate, 40.0);
        assert_invariants(&cart);

        // idempotence over the whole state
        let once = cart.clone();
        cart.sync_with_products(&catalog, rate(40.0), 0.12);
        assert_eq!(cart.items, once.items);
        assert_eq!(cart.tax_rate, once.tax_rate);
    }

    #[test]
    fn test_totals_selector() {
        let mut cart = CartState::new(0.16);
        let mut a = item("A", 200.0, 10);
        a.discount_chain = DiscountChain::parse("25");
        cart.add_item(a, 3);

        let totals = cart.totals();
        assert_eq!(totals.total_gross, 600.0);
        assert_eq!(totals.total, 522.0);
        assert_eq!(cart.total_units(), 3);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut cart = CartState::new(0.16);
        let mut a = item("A-100", 12.5, 8);
        a.discount_chain = DiscountChain::parse("5+10+2");
        a.image_ref = Some("img/a-100.png".to_string());
        cart.add_item(a, 3);
        cart.sync_with_products(
            &[CatalogEntry {
                id: "A-100".to_string(),
                description: "Article A-100".to_string(),
                unit_price: 12.5,
                available: 8,
                image_ref: Some("img/a-100.png".to_string()),
            }],
            rate(36.5),
            0.16,
        );
        cart.set_display_currency(true);

        let json = serde_json::to_string(&cart).unwrap();
        let back: CartState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_deserialize_tolerates_missing_fields() {
        // a document from an older build: no rate, no toggle, bare items
        let json = r#"{
            "items": [
                { "id": "A", "description": "Article A",
                  "unitPrice": 10.0, "available": 4, "quantity": 2 }
            ]
        }"#;

        let cart: CartState = serde_json::from_str(json).unwrap();
        assert_eq!(cart.items.len(), 1);
        assert!(cart.items[0].discount_chain.is_empty());
        assert!(cart.exchange_rate.is_none());
        assert_eq!(cart.tax_rate, 0.0);
        assert!(!cart.display_in_secondary_currency);
    }
}
