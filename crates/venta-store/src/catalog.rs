//! # Catalog Provider
//!
//! The seam to the remote backend: the three fetches the cart core
//! consumes, bundled behind one async trait. Transport, authentication,
//! and endpoints live behind implementations of this trait — they are not
//! part of this workspace.

use async_trait::async_trait;

use venta_core::{CatalogEntry, ExchangeRate};

use crate::error::StoreResult;

/// Remote source of catalog truth.
///
/// Implementations should map transport failures into
/// [`StoreError::Fetch`](crate::StoreError::Fetch) so callers can treat
/// them as retryable.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// The sellable articles with current prices and availability.
    async fn fetch_catalog(&self) -> StoreResult<Vec<CatalogEntry>>;

    /// The current base → secondary exchange rate.
    async fn fetch_exchange_rate(&self) -> StoreResult<ExchangeRate>;

    /// The current tax fraction (e.g., 0.16).
    async fn fetch_tax_rate(&self) -> StoreResult<f64>;
}

/// Everything one refresh needs, fetched before the cart is touched.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub catalog: Vec<CatalogEntry>,
    pub exchange_rate: ExchangeRate,
    pub tax_rate: f64,
}

/// Performs all three fetches.
///
/// Any failure aborts the whole snapshot, so a refresh either has complete
/// fresh truth or leaves the cart exactly as it was — there is no partial
/// reconciliation.
pub async fn fetch_snapshot(provider: &dyn CatalogProvider) -> StoreResult<CatalogSnapshot> {
    let catalog = provider.fetch_catalog().await?;
    let exchange_rate = provider.fetch_exchange_rate().await?;
    let tax_rate = provider.fetch_tax_rate().await?;

    Ok(CatalogSnapshot {
        catalog,
        exchange_rate,
        tax_rate,
    })
}
