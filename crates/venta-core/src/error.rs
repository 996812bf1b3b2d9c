//! # Error Types
//!
//! Validation error types for venta-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bounds)
//! 3. Errors are enum variants, never String
//!
//! ## Why No Domain Error Enum?
//! Cart operations clamp, drop, or silently ignore instead of failing
//! (quantity requests beyond availability are clamped, unknown SKUs are
//! no-ops, malformed discount tokens are filtered). The only failures the
//! pure core can produce are boundary validation failures.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when boundary input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value could not be interpreted at all (e.g., non-numeric token).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "discount".to_string(),
        };
        assert_eq!(err.to_string(), "discount must be positive");

        let err = ValidationError::OutOfRange {
            field: "tax rate".to_string(),
            min: 0.0,
            max: 1.0,
        };
        assert_eq!(err.to_string(), "tax rate must be between 0 and 1");
    }
}
