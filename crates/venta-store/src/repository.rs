//! # Cart Repository
//!
//! The injectable persistence seam: `load()` / `save(state)` over a backing
//! medium, so a file on device, a key-value store, or plain memory (tests)
//! are all interchangeable.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BEST-EFFORT PERSISTENCE                                                │
//! │                                                                         │
//! │  mutation ──► in-memory CartState (authoritative) ──► save() spawned    │
//! │                                                          │              │
//! │                                            failure ──► logged, dropped  │
//! │                                                                         │
//! │  Cold start loads the last snapshot that DID make it to storage; it     │
//! │  may be stale relative to the previous session's final state. Accepted  │
//! │  tradeoff, not a defect.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::warn;

use venta_core::CartState;

use crate::error::StoreResult;

// =============================================================================
// Repository Trait
// =============================================================================

/// Persistence backend for the cart document.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Loads the last persisted snapshot, `None` when nothing usable is
    /// stored.
    async fn load(&self) -> StoreResult<Option<CartState>>;

    /// Persists a full snapshot, replacing whatever was stored before.
    async fn save(&self, state: &CartState) -> StoreResult<()>;
}

// =============================================================================
// JSON File Repository
// =============================================================================

/// Stores the cart as one JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository over the given document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileRepository { path: path.into() }
    }
}

#[async_trait]
impl CartRepository for JsonFileRepository {
    /// Reads and parses the document.
    ///
    /// A missing file is a fresh install; an unparseable document is
    /// treated the same way (the schema is tolerant, not versioned), with
    /// a warning so the discarded document shows up in logs.
    async fn load(&self) -> StoreResult<Option<CartState>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<CartState>(&bytes) {
            Ok(state) => Ok(Some(state)),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "discarding unreadable cart document");
                Ok(None)
            }
        }
    }

    async fn save(&self, state: &CartState) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(state)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

// =============================================================================
// Memory Repository
// =============================================================================

/// In-memory repository for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    slot: Mutex<Option<CartState>>,
}

impl MemoryRepository {
    /// An empty repository (fresh-install behavior).
    pub fn new() -> Self {
        MemoryRepository::default()
    }

    /// A repository pre-seeded with a snapshot (warm-start behavior).
    pub fn seeded(state: CartState) -> Self {
        MemoryRepository {
            slot: Mutex::new(Some(state)),
        }
    }

    /// The currently stored snapshot, if any.
    pub fn stored(&self) -> Option<CartState> {
        self.slot.lock().expect("memory repository mutex poisoned").clone()
    }
}

#[async_trait]
impl CartRepository for MemoryRepository {
    async fn load(&self) -> StoreResult<Option<CartState>> {
        Ok(self.stored())
    }

    async fn save(&self, state: &CartState) -> StoreResult<()> {
        *self.slot.lock().expect("memory repository mutex poisoned") = Some(state.clone());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_doc(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("venta-{}-{}.json", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_file_round_trip() {
        let path = temp_doc("round-trip");
        let repo = JsonFileRepository::new(&path);

        let mut state = CartState::new(0.16);
        state.set_display_currency(true);

        repo.save(&state).await.unwrap();
        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded, Some(state));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_loads_as_none() {
        let repo = JsonFileRepository::new(temp_doc("missing"));
        assert_eq!(repo.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_document_loads_as_none() {
        let path = temp_doc("corrupt");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let repo = JsonFileRepository::new(&path);
        assert_eq!(repo.load().await.unwrap(), None);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_memory_repository() {
        let repo = MemoryRepository::new();
        assert_eq!(repo.load().await.unwrap(), None);

        let state = CartState::new(0.16);
        repo.save(&state).await.unwrap();
        assert_eq!(repo.stored(), Some(state));
    }
}
