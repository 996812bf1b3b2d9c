//! # Catalog Reconciliation
//!
//! Merges a persisted cart against a freshly fetched catalog snapshot.
//! Prices and availability drift while a cart sits on the device; this
//! module re-anchors every line to the catalog's current truth.
//!
//! ## Merge Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Reconciling one cart line                               │
//! │                                                                         │
//! │  SKU still in catalog?                                                  │
//! │  ├── NO  ──► line dropped (discontinued article, not an error)          │
//! │  └── YES ──► unit_price, available ◄── catalog record                   │
//! │              quantity = min(quantity, available)                        │
//! │              quantity == 0 ──► line dropped                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reconciliation only clamps and drops; it never reintroduces removed
//! lines or grows a quantity. Running it twice against the same catalog
//! yields the same result.

use crate::types::{CartItem, CatalogEntry};

/// Re-anchors cart lines to a catalog snapshot.
///
/// Returns the corrected lines; the input is untouched. Lines keep their
/// relative order and their discount chains.
pub fn reconcile(items: &[CartItem], catalog: &[CatalogEntry]) -> Vec<CartItem> {
    items
        .iter()
        .filter_map(|item| {
            let entry = catalog.iter().find(|e| e.id == item.id)?;
            let quantity = item.quantity.min(entry.available);
            if quantity == 0 {
                return None;
            }

            let mut corrected = item.clone();
            corrected.unit_price = entry.unit_price;
            corrected.available = entry.available;
            corrected.quantity = quantity;
            Some(corrected)
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
