//! # Discount Chains
//!
//! The UI encodes stacked percentage discounts as a `+`-delimited string
//! (`"5+10+2"`). That string form exists only at the boundary: it is parsed
//! into a typed, ordered [`DiscountChain`] immediately, and the string is
//! re-derived only for persistence and editing round-trip — never for
//! computation.
//!
//! ## Compounding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Discounts compound MULTIPLICATIVELY, not additively                    │
//! │                                                                         │
//! │    "10+10" on $100:                                                     │
//! │      $100 − 10%  = $90                                                  │
//! │      $90  − 10%  = $81      ← combined 19%, not 20%                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parsing Rules
//! Tokens that are non-numeric, non-finite, zero, or negative are silently
//! dropped; the remaining percentages keep their declaration order. Order
//! does not change the numeric result (multiplication is commutative) but
//! is meaningful to the user, so it is preserved for display.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::validation::validate_discount_percent;

/// Separator between percentage tokens in the UI/persisted string form.
const CHAIN_SEPARATOR: char = '+';

// =============================================================================
// DiscountChain
// =============================================================================

/// An ordered chain of positive percentage discounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscountChain(Vec<f64>);

impl DiscountChain {
    /// An empty chain (no discount).
    #[inline]
    pub fn none() -> Self {
        DiscountChain(Vec::new())
    }

    /// Builds a chain from already-typed percentages, silently dropping
    /// non-positive or non-finite values while preserving order.
    pub fn from_percentages<I: IntoIterator<Item = f64>>(percentages: I) -> Self {
        DiscountChain(
            percentages
                .into_iter()
                .filter(|p| validate_discount_percent(*p).is_ok())
                .collect(),
        )
    }

    /// Parses the `+`-delimited UI form.
    ///
    /// ## Example
    /// ```rust
    /// use venta_core::discount::DiscountChain;
    ///
    /// let chain = DiscountChain::parse("5+10+2");
    /// assert_eq!(chain.percentages(), &[5.0, 10.0, 2.0]);
    ///
    /// // Malformed tokens are dropped, not rejected wholesale
    /// let chain = DiscountChain::parse("5+x+-3+0+10");
    /// assert_eq!(chain.percentages(), &[5.0, 10.0]);
    /// ```
    pub fn parse(input: &str) -> Self {
        Self::from_percentages(
            input
                .split(CHAIN_SEPARATOR)
                .filter_map(|token| token.trim().parse::<f64>().ok()),
        )
    }

    /// The percentages in declaration order.
    #[inline]
    pub fn percentages(&self) -> &[f64] {
        &self.0
    }

    /// True when no discount applies.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of stacked discounts.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Applies the chain to an amount, in order, without rounding.
    ///
    /// Each step removes `p%` of the running amount, so stacked discounts
    /// compound multiplicatively.
    pub fn apply(&self, amount: f64) -> f64 {
        self.0
            .iter()
            .fold(amount, |acc, p| acc - acc * p / 100.0)
    }
}

/// Renders the chain back into the `+`-delimited editing form.
///
/// `parse` followed by `Display` reproduces the surviving tokens in their
/// original order: `"5+10+2"` round-trips exactly.
impl fmt::Display for DiscountChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for p in &self.0 {
            if !first {
                f.write_str("+")?;
            }
            write!(f, "{}", p)?;
            first = false;
        }
        Ok(())
    }
}

// =============================================================================
// Serde (string form)
// =============================================================================
// The persisted cart document stores the chain exactly as the user would
// edit it, so serialization goes through the string form on both sides.

impl Serialize for DiscountChain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DiscountChain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ChainVisitor;

        impl<'de> de::Visitor<'de> for ChainVisitor {
            type Value = DiscountChain;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a '+'-delimited discount string such as \"5+10+2\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<DiscountChain, E> {
                Ok(DiscountChain::parse(value))
            }
        }

        deserializer.deserialize_str(ChainVisitor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let chain = DiscountChain::parse("5+10+2");
        assert_eq!(chain.percentages(), &[5.0, 10.0, 2.0]);
    }

    #[test]
    fn test_parse_drops_malformed_tokens() {
        // non-numeric, negative, and zero tokens vanish silently
        let chain = DiscountChain::parse("abc+5+-10+0+2.5");
        assert_eq!(chain.percentages(), &[5.0, 2.5]);

        assert!(DiscountChain::parse("").is_empty());
        assert!(DiscountChain::parse("+++").is_empty());
        assert!(DiscountChain::parse("NaN+inf").is_empty());
    }

    #[test]
    fn test_apply_compounds_multiplicatively() {
        let chain = DiscountChain::parse("10+10");
        // two 10% discounts = 19% combined, not 20%
        assert_eq!(chain.apply(100.0), 81.0);
    }

    #[test]
    fn test_apply_empty_chain_is_identity() {
        assert_eq!(DiscountChain::none().apply(42.5), 42.5);
    }

    #[test]
    fn test_display_round_trip() {
        let chain = DiscountChain::parse("5+10+2.5");
        assert_eq!(chain.to_string(), "5+10+2.5");
        assert_eq!(DiscountChain::parse(&chain.to_string()), chain);
    }

    #[test]
    fn test_serde_string_form() {
        let chain = DiscountChain::parse("5+10");
        let json = serde_json::to_string(&chain).unwrap();
        assert_eq!(json, "\"5+10\"");

        let back: DiscountChain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chain);
    }

    #[test]
    fn test_from_percentages_filters() {
        let chain = DiscountChain::from_percentages([10.0, -5.0, 0.0, 2.0]);
        assert_eq!(chain.percentages(), &[10.0, 2.0]);
    }
}
