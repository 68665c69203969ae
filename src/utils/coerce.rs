//! Lenient number parsing for text scraped out of markup.
//!
//! Site fields mix numbers with units and punctuation ("4★", "5121-mtt-otzyvy",
//! "4,5 из 5"), so a strict parse is tried first and a pattern search second.

use regex::Regex;
use std::sync::LazyLock;
use crate::error::{Error, Result};

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+").expect("valid regex"));

/// Parses `text` as an integer, falling back to the first run of digits in it.
pub fn parse_int(text: &str) -> Result<i64> {
    if let Ok(value) = text.trim().parse::<i64>() {
        return Ok(value);
    }

    DIGITS
        .find(text)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .ok_or_else(|| Error::parse(text, "integer"))
}

/// Parses `text` as a float, accepting `,` as the decimal separator and falling
/// back to the first `digits.digits` group in it.
pub fn parse_float(text: &str) -> Result<f64> {
    let normalized = text.replace(',', ".");
    if let Ok(value) = normalized.trim().parse::<f64>() {
        return Ok(value);
    }

    DECIMAL
        .find(&normalized)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .ok_or_else(|| Error::parse(text, "decimal number"))
}
