//! Locale-tolerant numeric normalization.
//!
//! Accepts thousands-separated-with-spaces and European decimal-comma
//! formats identically: `"1 234,56"` and `"1234.56"` both normalize to
//! 1234.56. Anything else is reported as invalid, never thrown.

use std::sync::LazyLock;

use regex::Regex;

use csvclean_model::Cell;

/// Optional leading minus, one or more digits, optional single decimal
/// point followed by one or more digits.
static NUMERIC_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("numeric pattern compiles"));

/// Outcome of normalizing one source cell.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedNumber {
    Valid(f64),
    /// Carries the original field text for reporting.
    Invalid(String),
}

impl NormalizedNumber {
    pub fn is_valid(&self) -> bool {
        matches!(self, NormalizedNumber::Valid(_))
    }
}

/// Normalizes a cell to an exact numeric value. Total: every input yields
/// `Valid` or `Invalid`, never a panic.
pub fn normalize(cell: &Cell) -> NormalizedNumber {
    let text = match cell {
        Cell::Numeric(value) => return NormalizedNumber::Valid(*value),
        Cell::Null | Cell::Blank => return NormalizedNumber::Invalid(cell.to_field()),
        Cell::Text(text) => text,
    };
    if text.trim().is_empty() {
        return NormalizedNumber::Invalid(text.clone());
    }
    let cleaned: String = text
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| if ch == ',' { '.' } else { ch })
        .collect();
    if !NUMERIC_SHAPE.is_match(&cleaned) {
        return NormalizedNumber::Invalid(text.clone());
    }
    match cleaned.parse::<f64>() {
        Ok(value) => NormalizedNumber::Valid(value),
        Err(_) => NormalizedNumber::Invalid(text.clone()),
    }
}
