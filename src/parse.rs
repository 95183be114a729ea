//! Recovering numbers from formatted or hand-typed text.

use crate::error::{EmiError, Result};
use log::trace;

/// Extracts the number from text such as `"₹10,00,000"` or `" 8.5 % "`.
///
/// Every character other than an ASCII digit, `-` or `.` is dropped before
/// parsing. What remains has to read as one plain decimal number: a leading
/// minus sign at most and a single decimal point at most. Leftovers like
/// `"1-2"` or `"1.2.3"` are ambiguous and rejected rather than guessed at.
pub fn parse_locale_number(text: &str) -> Result<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();
    trace!("'{}' reduced to '{}'", text, cleaned);

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return Err(EmiError::invalid_input(
            "text",
            format!("'{}' holds no digits", text),
        ));
    }
    if cleaned.rfind('-').is_some_and(|pos| pos > 0) {
        return Err(EmiError::invalid_input(
            "text",
            format!("'{}' has a minus sign after the first digit", text),
        ));
    }
    if cleaned.matches('.').count() > 1 {
        return Err(EmiError::invalid_input(
            "text",
            format!("'{}' has more than one decimal point", text),
        ));
    }

    cleaned
        .parse::<f64>()
        .map_err(|e| EmiError::invalid_input("text", format!("'{}': {}", text, e)))
}
