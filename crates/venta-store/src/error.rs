//! # Store Error Types
//!
//! Failures the stateful shell can produce.
//!
//! ## Design Principles
//! 1. `thiserror` enums, never strings
//! 2. Fetch failures are retryable and leave the cart untouched
//! 3. Persistence failures never reach the caller of a mutation — they are
//!    logged and swallowed where they occur (the in-memory state remains
//!    authoritative for the session)

use thiserror::Error;

/// Errors from persistence and catalog refresh.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A catalog/exchange-rate/tax-rate fetch failed.
    ///
    /// Retryable: the cart has not been modified, calling refresh again is
    /// always safe.
    #[error("catalog refresh failed: {0}")]
    Fetch(String),

    /// Storage I/O failed while reading or writing the cart document.
    #[error("cart storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The cart document could not be (de)serialized.
    #[error("cart document malformed: {0}")]
    Serde(#[from] serde_json::Error),
}

impl StoreError {
    /// Builds a retryable fetch error.
    pub fn fetch(reason: impl Into<String>) -> Self {
        StoreError::Fetch(reason.into())
    }

    /// Whether the caller may simply try the operation again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Fetch(_))
    }
}

/// Convenience type alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_errors_are_retryable() {
        assert!(StoreError::fetch("backend unreachable").is_retryable());

        let io = StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert!(!io.is_retryable());
    }

    #[test]
    fn test_error_messages() {
        let err = StoreError::fetch("timeout");
        assert_eq!(err.to_string(), "catalog refresh failed: timeout");
    }
}
