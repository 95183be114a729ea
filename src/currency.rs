//! Indian Rupee display formatting.
//!
//! Amounts are grouped the Indian way: the last three integer digits form one
//! group and every two digits before that form another (`10,00,000`).

use crate::error::{ensure_finite, EmiError, Result};
use log::{trace, warn};

pub const RUPEE_SYMBOL: char = '₹';

/// Fraction digits used when the caller has no preference.
pub const DEFAULT_DECIMAL_PLACES: u32 = 0;

/// Largest precision accepted by [`format_inr`].
pub const MAX_DECIMAL_PLACES: u32 = 20;

// the currency always shows at least this many fraction digits, unless fewer are requested
const CURRENCY_MIN_FRACTION_DIGITS: u32 = 2;

/// Formats `amount` as rupees, rounded half away from zero to `decimal_places`.
///
/// At least `min(decimal_places, 2)` fraction digits are kept; zeros past that
/// are trimmed, so `format_inr(1.5, 4)` is `₹1.50`.
pub fn format_inr(amount: f64, decimal_places: u32) -> Result<String> {
    let amount = ensure_finite("amount", amount)?;
    if decimal_places > MAX_DECIMAL_PLACES {
        return Err(EmiError::invalid_input(
            "decimal_places",
            format!("{} exceeds the maximum of {}", decimal_places, MAX_DECIMAL_PLACES),
        ));
    }

    let scaled = (amount.abs() * 10_f64.powi(decimal_places as i32)).round();
    if !scaled.is_finite() {
        return Err(EmiError::invalid_input(
            "amount",
            format!("{} is too large to show with {} decimal places", amount, decimal_places),
        ));
    }

    let places = decimal_places as usize;
    let mut digits = format!("{:.0}", scaled);
    if digits.len() <= places {
        digits = format!("{}{}", "0".repeat(places + 1 - digits.len()), digits);
    }
    let (int_digits, frac_digits) = digits.split_at(digits.len() - places);

    let min_fraction = decimal_places.min(CURRENCY_MIN_FRACTION_DIGITS) as usize;
    let mut fraction = frac_digits.to_string();
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut formatted = String::with_capacity(digits.len() + 8);
    if amount < 0. && scaled != 0. {
        formatted.push('-');
    }
    formatted.push(RUPEE_SYMBOL);
    formatted.push_str(&group_indian(int_digits));
    if !fraction.is_empty() {
        formatted.push('.');
        formatted.push_str(&fraction);
    }

    trace!("formatted {} to {} places as {}", amount, decimal_places, formatted);
    Ok(formatted)
}

/// [`format_inr`], falling back to the plain number with two decimals when the
/// amount cannot be shown as rupees. The failure is logged.
pub fn format_inr_or_raw(amount: f64, decimal_places: u32) -> String {
    format_inr(amount, decimal_places).unwrap_or_else(|e| {
        warn!("showing {} unformatted: {}", amount, e);
        format!("{:.2}", amount)
    })
}

/// Coerces raw control text to a number, then formats it with [`format_inr`].
///
/// Surrounding whitespace is ignored and blank text counts as zero. Anything
/// else that is not a plain number (`"1,000"`, `"abc"`) is rejected.
pub fn format_inr_text(text: &str, decimal_places: u32) -> Result<String> {
    let trimmed = text.trim();
    let amount = if trimmed.is_empty() {
        0.
    } else {
        trimmed
            .parse::<f64>()
            .map_err(|_| EmiError::invalid_input("amount", format!("'{}' is not a number", text)))?
    };
    format_inr(amount, decimal_places)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, digit) in head.chars().enumerate() {
        // pairs are counted from the right of the head
        if i > 0 && (head.len() - i) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}

#[cfg(test)]
mod tests {
    use super::{format_inr, format_inr_or_raw, format_inr_text, group_indian, DEFAULT_DECIMAL_PLACES};
    use crate::error::EmiError;
    use test_log::test;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian("0"), "0");
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("10000"), "10,000");
        assert_eq!(group_indian("100000"), "1,00,000");
        assert_eq!(group_indian("1000000"), "10,00,000");
        assert_eq!(group_indian("123456789"), "12,34,56,789");
    }

    #[test]
    fn test_format_whole_rupees() {
        assert_eq!(format_inr(1000000., DEFAULT_DECIMAL_PLACES).unwrap(), "₹10,00,000");
        assert_eq!(format_inr(0., 0).unwrap(), "₹0");
        assert_eq!(format_inr(500., 0).unwrap(), "₹500");
        assert_eq!(format_inr(8678.2323, 0).unwrap(), "₹8,678");
        assert_eq!(format_inr(2.5, 0).unwrap(), "₹3");
        assert_eq!(format_inr(99999.5, 0).unwrap(), "₹1,00,000");
    }

    #[test]
    fn test_format_fraction_digits() {
        assert_eq!(format_inr(8678.2323, 2).unwrap(), "₹8,678.23");
        assert_eq!(format_inr(100., 2).unwrap(), "₹100.00");
        assert_eq!(format_inr(100., 1).unwrap(), "₹100.0");
        assert_eq!(format_inr(1.5, 4).unwrap(), "₹1.50");
        assert_eq!(format_inr(1.2345, 4).unwrap(), "₹1.2345");
        assert_eq!(format_inr(0.25, 2).unwrap(), "₹0.25");
        assert_eq!(format_inr(0.05, 1).unwrap(), "₹0.1");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_inr(-1234567., 0).unwrap(), "-₹12,34,567");
        assert_eq!(format_inr(-0.75, 2).unwrap(), "-₹0.75");
        assert_eq!(format_inr(-0.4, 0).unwrap(), "₹0");
    }

    #[test]
    fn test_format_rejects_non_finite() {
        assert!(matches!(format_inr(f64::NAN, 0), Err(EmiError::InvalidInput { .. })));
        assert!(matches!(format_inr(f64::INFINITY, 0), Err(EmiError::InvalidInput { .. })));
        assert!(matches!(format_inr(1e300, 20), Err(EmiError::InvalidInput { .. })));
        assert!(matches!(format_inr(1., 21), Err(EmiError::InvalidInput { .. })));
    }

    #[test]
    fn test_format_or_raw() {
        assert_eq!(format_inr_or_raw(123456.789, 2), "₹1,23,456.79");
        assert_eq!(format_inr_or_raw(f64::NAN, 0), "NaN");
        assert_eq!(format_inr_or_raw(f64::NEG_INFINITY, 2), "-inf");
        assert_eq!(format_inr_or_raw(1.5, 21), "1.50");
    }

    #[test]
    fn test_format_text() {
        assert_eq!(format_inr_text("2500000", 0).unwrap(), "₹25,00,000");
        assert_eq!(format_inr_text(" 750.5 ", 2).unwrap(), "₹750.50");
        assert_eq!(format_inr_text("", 0).unwrap(), "₹0");
        assert!(matches!(format_inr_text("abc", 0), Err(EmiError::InvalidInput { .. })));
        assert!(matches!(format_inr_text("1,000", 0), Err(EmiError::InvalidInput { .. })));
        assert!(matches!(format_inr_text("NaN", 0), Err(EmiError::InvalidInput { .. })));
    }
}
