//! # venta-core: Pure Business Logic for the Venta Order Cart
//!
//! This crate is the **heart** of the Venta mobile ordering app. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Venta Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Mobile UI Shell                              │   │
//! │  │    Catalog screen ──► Cart screen ──► Order confirmation        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    venta-store (stateful shell)                 │   │
//! │  │    CartStore, persistence, catalog refresh                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ venta-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │   cart    │  │ reconcile │  │   │
//! │  │   │ CartItem  │  │  totals   │  │ CartState │  │  catalog  │  │   │
//! │  │   │ ExchRate  │  │  round2   │  │ mutations │  │   merge   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CartItem, CatalogEntry, ExchangeRate)
//! - [`discount`] - Typed discount chains parsed from the `"5+10+2"` UI form
//! - [`pricing`] - Gross/discount/tax/total arithmetic
//! - [`cart`] - The CartState unit of persistence and its mutations
//! - [`reconcile`] - Merging a persisted cart against a fresh catalog
//! - [`currency`] - Base/secondary currency presentation
//! - [`validation`] - Boundary input validation
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and storage access is FORBIDDEN here
//! 3. **Clamp, Don't Fail**: Quantity mutations clamp into `[0, available]`
//!    and drop empty rows; they never return errors
//! 4. **Round Last**: Monetary outputs are rounded to 2 decimals exactly once,
//!    never in intermediate steps
//!
//! ## Example Usage
//!
//! ```rust
//! use venta_core::discount::DiscountChain;
//! use venta_core::pricing::calculate_totals;
//!
//! // Two stacked 10% discounts compound to 19%, not 20%
//! let chain = DiscountChain::parse("10+10");
//! let totals = calculate_totals(100.0, 1, &chain, 0.0);
//!
//! assert_eq!(totals.final_unit_price, 81.0);
//! assert_eq!(totals.discount_amount, 19.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod currency;
pub mod discount;
pub mod error;
pub mod pricing;
pub mod reconcile;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use venta_core::CartState` instead of
// `use venta_core::cart::CartState`

pub use cart::CartState;
pub use discount::DiscountChain;
pub use error::ValidationError;
pub use pricing::{LineTotals, OrderTotals};
pub use types::{CartItem, CatalogEntry, ExchangeRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default tax rate (IVA) applied until the first catalog refresh supplies
/// the authoritative one.
pub const DEFAULT_TAX_RATE: f64 = 0.16;

/// ISO 4217 code of the base currency all catalog prices are quoted in.
pub const BASE_CURRENCY_CODE: &str = "USD";
