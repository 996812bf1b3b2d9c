//! # Cart Store
//!
//! The live cart: owns the authoritative `CartState`, applies every
//! mutation synchronously, publishes each new snapshot to subscribers, and
//! persists best-effort after every change.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         CartStore                                       │
//! │                                                                         │
//! │  UI event ──► mutation op ──► Mutex<CartState> ──► watch channel ──► UI │
//! │                                     │                                   │
//! │                                     └──► tokio::spawn(repo.save)        │
//! │                                              (fire-and-forget)          │
//! │                                                                         │
//! │  catalog refresh ──► fetch_snapshot ──► sync_with_products              │
//! │        (any fetch error: retryable, cart untouched)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! One logical writer at a time: the UI's event handlers are serialized,
//! and a refresh landing mid-session is last-writer-wins — it is applied
//! against whatever state exists at that moment and only clamps or drops.
//! The `Mutex` is held only for the synchronous state change, never across
//! an await point.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{debug, warn};

use venta_core::currency::format_amount;
use venta_core::{CartItem, CartState, CatalogEntry, ExchangeRate, OrderTotals};

use crate::catalog::{fetch_snapshot, CatalogProvider};
use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::repository::CartRepository;

/// The subscribable, persisted cart.
pub struct CartStore {
    state: Mutex<CartState>,
    watch_tx: watch::Sender<CartState>,
    repo: Arc<dyn CartRepository>,
    base_currency_code: String,
}

impl CartStore {
    /// Boots the store from the last persisted snapshot.
    ///
    /// A missing or unreadable document yields a fresh empty cart at the
    /// configured default tax rate. A load failure is logged, not raised —
    /// the user gets an empty cart rather than a dead screen.
    pub async fn load(repo: Arc<dyn CartRepository>, config: &StoreConfig) -> Self {
        let state = match repo.load().await {
            Ok(Some(state)) => state,
            Ok(None) => CartState::new(config.default_tax_rate),
            Err(error) => {
                warn!(%error, "cart load failed, starting empty");
                CartState::new(config.default_tax_rate)
            }
        };

        let (watch_tx, _) = watch::channel(state.clone());
        CartStore {
            state: Mutex::new(state),
            watch_tx,
            repo,
            base_currency_code: config.base_currency_code.clone(),
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// A receiver that sees every snapshot produced by future mutations.
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.watch_tx.subscribe()
    }

    /// The current state, cloned.
    pub fn snapshot(&self) -> CartState {
        self.state.lock().expect("cart state mutex poisoned").clone()
    }

    /// Aggregated totals at the cart's current tax rate.
    pub fn totals(&self) -> OrderTotals {
        self.state.lock().expect("cart state mutex poisoned").totals()
    }

    /// Formats an amount in the currently displayed currency.
    pub fn format(&self, amount: f64) -> String {
        let state = self.state.lock().expect("cart state mutex poisoned");
        format_amount(
            amount,
            state.display_in_secondary_currency,
            state.exchange_rate.as_ref(),
        )
    }

    /// The grand total, formatted in the currently displayed currency.
    pub fn formatted_total(&self) -> String {
        self.format(self.totals().total)
    }

    /// ISO 4217 code of the currency amounts are currently displayed in:
    /// the exchange rate's code when the secondary toggle is on and a rate
    /// is known, the configured base code otherwise.
    pub fn display_currency_code(&self) -> String {
        let state = self.state.lock().expect("cart state mutex poisoned");
        match (&state.exchange_rate, state.display_in_secondary_currency) {
            (Some(rate), true) => rate.currency_code.clone(),
            _ => self.base_currency_code.clone(),
        }
    }

    // =========================================================================
    // Mutations (all synchronous, all persisted fire-and-forget)
    // =========================================================================

    /// Adds `qty` units of an article; see
    /// [`CartState::add_item`] for the merge/clamp rules.
    pub fn add_item(&self, item: CartItem, qty: u32) {
        debug!(id = %item.id, qty, "add_item");
        self.mutate(|state| state.add_item(item, qty));
    }

    /// Increases a line's quantity, clamped to availability.
    pub fn increase(&self, id: &str, by: u32) {
        debug!(%id, by, "increase");
        self.mutate(|state| state.increase(id, by));
    }

    /// Decreases a line's quantity; reaching 0 removes the line.
    pub fn decrease(&self, id: &str, by: u32) {
        debug!(%id, by, "decrease");
        self.mutate(|state| state.decrease(id, by));
    }

    /// Removes a line unconditionally.
    pub fn remove_item(&self, id: &str) {
        debug!(%id, "remove_item");
        self.mutate(|state| state.remove_item(id));
    }

    /// Empties the cart; rates and the currency toggle survive.
    pub fn clear_order(&self) {
        debug!("clear_order");
        self.mutate(|state| state.clear_order());
    }

    /// Switches the presentation currency. Amounts are untouched.
    pub fn set_display_currency(&self, in_secondary: bool) {
        debug!(in_secondary, "set_display_currency");
        self.mutate(|state| state.set_display_currency(in_secondary));
    }

    /// Applies externally fetched catalog truth; the store's only entry
    /// point for it.
    pub fn sync_with_products(
        &self,
        catalog: &[CatalogEntry],
        exchange_rate: ExchangeRate,
        tax_rate: f64,
    ) {
        debug!(entries = catalog.len(), tax_rate, "sync_with_products");
        self.mutate(|state| state.sync_with_products(catalog, exchange_rate, tax_rate));
    }

    /// Fetches catalog, exchange rate, and tax rate, then reconciles.
    ///
    /// All three fetches complete before the cart is touched, so any
    /// failure returns a retryable error with the cart exactly as it was.
    pub async fn refresh(&self, provider: &dyn CatalogProvider) -> StoreResult<()> {
        let snapshot = fetch_snapshot(provider).await?;
        self.sync_with_products(
            &snapshot.catalog,
            snapshot.exchange_rate,
            snapshot.tax_rate,
        );
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Applies one synchronous mutation, publishes the new snapshot, and
    /// kicks off the best-effort persistence write.
    fn mutate<F: FnOnce(&mut CartState)>(&self, f: F) {
        let snapshot = {
            let mut state = self.state.lock().expect("cart state mutex poisoned");
            f(&mut state);
            state.clone()
        };

        self.watch_tx.send_replace(snapshot.clone());

        let repo = Arc::clone(&self.repo);
        tokio::spawn(async move {
            if let Err(error) = repo.save(&snapshot).await {
                warn!(%error, "cart persistence failed, in-memory state remains authoritative");
            }
        });
    }
}
