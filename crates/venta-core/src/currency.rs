//! # Currency Presentation
//!
//! Converts and formats amounts between the base currency and the secondary
//! display currency using a point-in-time exchange rate.
//!
//! Presentation-only: converted amounts are rendered, never written back
//! into stored figures. Toggling the display currency therefore never
//! mutates the cart.

use crate::types::ExchangeRate;

/// Converts an amount for display.
///
/// Returns the value as-is in the base currency, or multiplied by the
/// exchange rate when secondary display is requested. With no rate on hand
/// (cold start before the first refresh) the base amount is shown.
#[inline]
pub fn display_amount(value: f64, in_secondary: bool, rate: Option<&ExchangeRate>) -> f64 {
    match (in_secondary, rate) {
        (true, Some(rate)) => rate.convert(value),
        _ => value,
    }
}

/// Formats an amount with exactly 2 fractional digits and thousands
/// grouping.
///
/// ## Example
/// ```rust
/// use venta_core::currency::format_amount;
///
/// assert_eq!(format_amount(1234567.891, false, None), "1,234,567.89");
/// assert_eq!(format_amount(5.0, false, None), "5.00");
/// ```
pub fn format_amount(value: f64, in_secondary: bool, rate: Option<&ExchangeRate>) -> String {
    let converted = display_amount(value, in_secondary, rate);
    let fixed = format!("{:.2}", converted.abs());

    // sign comes from the rounded result: a value that rounds to zero
    // must never display as "-0.00"
    let sign = if converted < 0.0 && fixed != "0.00" { "-" } else { "" };

    // "{:.2}" always yields one '.', so the split cannot miss
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!("{}{}.{}", sign, group_thousands(integer), fraction)
}

/// Inserts a comma every three digits, right to left.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================
