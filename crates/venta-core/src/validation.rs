//! # Validation Module
//!
//! Boundary input validation for venta-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI form inputs                                                │
//! │  ├── Basic format checks, immediate user feedback                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Typed checks at the core boundary                                  │
//! │  └── Discount tokens: failing values are FILTERED, not rejected —       │
//! │      a half-valid chain keeps its valid tokens                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};

/// Validates a single discount percentage token.
///
/// ## Rules
/// - Must be finite (NaN/∞ from a garbage token never enter a chain)
/// - Must be strictly positive (zero is a no-op, negative is a surcharge)
///
/// Callers in the discount parser use this as a filter predicate rather
/// than propagating the error, per the silently-discard contract.
pub fn validate_discount_percent(percent: f64) -> ValidationResult<()> {
    if !percent.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "discount".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if percent <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "discount".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax-rate fraction.
///
/// ## Rules
/// - Must be a finite fraction in `[0, 1]` (0.16 = 16% IVA)
///
/// ## Example
/// ```rust
/// use venta_core::validation::validate_tax_rate;
///
/// assert!(validate_tax_rate(0.16).is_ok());
/// assert!(validate_tax_rate(0.0).is_ok());
/// assert!(validate_tax_rate(16.0).is_err()); // a percentage, not a fraction
/// ```
pub fn validate_tax_rate(rate: f64) -> ValidationResult<()> {
    if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
        return Err(ValidationError::OutOfRange {
            field: "tax rate".to_string(),
            min: 0.0,
            max: 1.0,
        });
    }

    Ok(())
}

/// Validates a SKU code.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 50 characters
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(5.0).is_ok());
        assert!(validate_discount_percent(0.5).is_ok());

        assert!(validate_discount_percent(0.0).is_err());
        assert!(validate_discount_percent(-10.0).is_err());
        assert!(validate_discount_percent(f64::NAN).is_err());
        assert!(validate_discount_percent(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_tax_rate() {
        assert!(validate_tax_rate(0.0).is_ok());
        assert!(validate_tax_rate(0.16).is_ok());
        assert!(validate_tax_rate(1.0).is_ok());

        assert!(validate_tax_rate(-0.1).is_err());
        assert!(validate_tax_rate(1.01).is_err());
        assert!(validate_tax_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("A-100").is_ok());
        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }
}
