//! # Domain Types
//!
//! Core domain types shared by the cart, pricing, and reconciliation modules.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    CartItem     │   │  CatalogEntry   │   │  ExchangeRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (SKU)       │   │  id (SKU)       │   │  rate           │       │
//! │  │  unit_price     │   │  unit_price     │   │  currency_code  │       │
//! │  │  available      │   │  available      │   │  as_of          │       │
//! │  │  quantity       │   │  description    │   └─────────────────┘       │
//! │  │  discount_chain │   │  image_ref      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A line is identified by its SKU code (`id`), unique within a cart. The
//! same code identifies the corresponding catalog entry during
//! reconciliation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::discount::DiscountChain;

// =============================================================================
// Cart Item
// =============================================================================

/// A line item in the order cart.
///
/// ## Invariants
/// After any mutation or reconciliation:
/// - `0 < quantity <= available` (a line whose quantity reaches 0 is removed,
///   never retained as a zero-quantity row)
/// - `id` is unique within the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// SKU code identifying the catalog entry this line reserves.
    pub id: String,

    /// Display description at time of adding.
    pub description: String,

    /// Unit price in the base currency.
    pub unit_price: f64,

    /// Remaining sellable units, as last known from the catalog.
    pub available: u32,

    /// Units reserved by this line.
    pub quantity: u32,

    /// Ordered chain of percentage discounts (may be empty).
    ///
    /// Persisted in its `"5+10+2"` string form; see [`DiscountChain`].
    #[serde(default)]
    pub discount_chain: DiscountChain,

    /// Reference to the product image, when the catalog carries one.
    #[serde(default)]
    pub image_ref: Option<String>,
}

impl CartItem {
    /// Builds a cart line from a catalog entry.
    ///
    /// The caller is responsible for clamping `quantity` against
    /// `entry.available` (see [`crate::cart::CartState::add_item`]).
    pub fn from_entry(entry: &CatalogEntry, quantity: u32, discount_chain: DiscountChain) -> Self {
        CartItem {
            id: entry.id.clone(),
            description: entry.description.clone(),
            unit_price: entry.unit_price,
            available: entry.available,
            quantity,
            discount_chain,
            image_ref: entry.image_ref.clone(),
        }
    }
}

// =============================================================================
// Catalog Entry
// =============================================================================

/// A record from the remote catalog, as consumed by reconciliation and by
/// the add-to-cart flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// SKU code.
    pub id: String,

    /// Display description.
    pub description: String,

    /// Unit price in the base currency.
    pub unit_price: f64,

    /// Remaining sellable units.
    pub available: u32,

    /// Reference to the product image.
    #[serde(default)]
    pub image_ref: Option<String>,
}

// =============================================================================
// Exchange Rate
// =============================================================================

/// A point-in-time exchange rate from the base currency to the secondary
/// display currency.
///
/// Replaced wholesale on each catalog refresh; never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    /// Base → secondary multiplier.
    pub rate: f64,

    /// ISO 4217 code of the secondary currency.
    pub currency_code: String,

    /// When the rate was quoted.
    pub as_of: DateTime<Utc>,
}

impl ExchangeRate {
    /// Converts a base-currency amount into the secondary currency.
    ///
    /// Presentation-only: converted amounts never feed back into stored
    /// figures.
    #[inline]
    pub fn convert(&self, base_amount: f64) -> f64 {
        base_amount * self.rate
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
