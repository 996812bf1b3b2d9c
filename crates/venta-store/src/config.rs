//! # Store Configuration
//!
//! Configuration for the cart store, loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`VENTA_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use venta_core::validation::validate_tax_rate;
use venta_core::{BASE_CURRENCY_CODE, DEFAULT_TAX_RATE};

/// File name of the persisted cart document.
///
/// The cart is one JSON document under this single fixed name; there is no
/// keyed or versioned storage.
pub const CART_DOCUMENT: &str = "cart-state.json";

/// Cart store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Where the cart document lives.
    pub storage_path: PathBuf,

    /// Tax fraction used until the first catalog refresh supplies the
    /// authoritative one.
    pub default_tax_rate: f64,

    /// ISO 4217 code of the base currency catalog prices are quoted in.
    ///
    /// The secondary code is not configured here: it travels with each
    /// fetched [`ExchangeRate`](venta_core::ExchangeRate).
    pub base_currency_code: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            storage_path: PathBuf::from(CART_DOCUMENT),
            default_tax_rate: DEFAULT_TAX_RATE,
            base_currency_code: BASE_CURRENCY_CODE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VENTA_STORAGE_PATH`: Override the cart document path
    /// - `VENTA_TAX_RATE`: Override the default tax fraction (e.g., "0.16");
    ///   values outside `[0, 1]` are ignored
    /// - `VENTA_BASE_CURRENCY`: Override the base currency code
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(path) = std::env::var("VENTA_STORAGE_PATH") {
            config.storage_path = PathBuf::from(path);
        }

        if let Ok(code) = std::env::var("VENTA_BASE_CURRENCY") {
            if !code.trim().is_empty() {
                config.base_currency_code = code.trim().to_string();
            }
        }

        if let Ok(rate_str) = std::env::var("VENTA_TAX_RATE") {
            if let Ok(rate) = rate_str.parse::<f64>() {
                if validate_tax_rate(rate).is_ok() {
                    config.default_tax_rate = rate;
                }
            }
        }

        config
    }
}
