//! # venta-store: Stateful Cart Store
//!
//! The stateful shell around [`venta_core`]: owns the live cart, persists
//! it after every mutation, and reconciles it against catalog refreshes.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Venta Data Flow                                  │
//! │                                                                         │
//! │  Mobile UI shell                                                        │
//! │       │  mutation calls            ▲  watch snapshots                   │
//! │       ▼                            │                                    │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   venta-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌──────────────┐     │   │
//! │  │   │   CartStore   │   │ CartRepository│   │CatalogProvider│    │   │
//! │  │   │  (store.rs)   │──►│ (repository)  │   │  (catalog)   │     │   │
//! │  │   │               │   │ JSON document │   │ remote seam  │     │   │
//! │  │   └───────────────┘   └───────────────┘   └──────────────┘     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  venta-core (pure pricing, mutations, reconciliation)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use venta_store::{CartStore, JsonFileRepository, StoreConfig};
//!
//! # async fn demo() {
//! let config = StoreConfig::from_env();
//! let repo = Arc::new(JsonFileRepository::new(&config.storage_path));
//! let store = CartStore::load(repo, &config).await;
//!
//! let mut updates = store.subscribe();
//! // hand `store` to the UI shell; render on every `updates.changed()`
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{CatalogProvider, CatalogSnapshot};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use repository::{CartRepository, JsonFileRepository, MemoryRepository};
pub use store::CartStore;
