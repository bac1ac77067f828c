#![deny(unsafe_code)]

use std::fmt;

/// A single table value.
///
/// Values read from a CSV file are only ever `Text` or `Blank`; `Null` is
/// introduced by operations that pad unmatched rows (left join) and `Numeric`
/// by operations that compute values. Numeric interpretation of text is never
/// implicit; it goes through the normalizer.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Cell {
    Null,
    Blank,
    Text(String),
    Numeric(f64),
}

impl Cell {
    /// Builds a cell from a raw CSV field: `Blank` when the field is empty
    /// after trimming, otherwise `Text` with the field kept verbatim.
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Cell::Blank
        } else {
            Cell::Text(raw.to_string())
        }
    }

    /// True for `Null`, `Blank`, and text that trims to the empty string.
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Null | Cell::Blank => true,
            Cell::Text(text) => text.trim().is_empty(),
            Cell::Numeric(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The field written for this cell in CSV output. `Null` and `Blank`
    /// both serialize as the empty field.
    pub fn to_field(&self) -> String {
        match self {
            Cell::Null | Cell::Blank => String::new(),
            Cell::Text(text) => text.clone(),
            Cell::Numeric(value) => format_numeric(*value),
        }
    }

    /// The grouping view of this cell: all missing cells collapse into one
    /// key, every other cell keys on its exact field text.
    pub fn group_key(&self) -> GroupKey {
        if self.is_missing() {
            GroupKey::Missing
        } else {
            GroupKey::Value(self.to_field())
        }
    }
}

/// Equality and ordering view of a cell used for grouping, duplicate
/// detection, and join matching. Derived ordering puts `Missing` before any
/// present value; aggregation output applies numeric-aware ordering on top.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    Missing,
    Value(String),
}

impl GroupKey {
    pub fn as_str(&self) -> &str {
        match self {
            GroupKey::Missing => "",
            GroupKey::Value(value) => value,
        }
    }

    /// The cell this key renders as in an output table.
    pub fn to_cell(&self) -> Cell {
        match self {
            GroupKey::Missing => Cell::Blank,
            GroupKey::Value(value) => Cell::Text(value.clone()),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_distinguishes_blank_and_text() {
        assert_eq!(Cell::from_raw(""), Cell::Blank);
        assert_eq!(Cell::from_raw("   "), Cell::Blank);
        assert_eq!(Cell::from_raw("x"), Cell::Text("x".to_string()));
        assert_eq!(Cell::from_raw(" x "), Cell::Text(" x ".to_string()));
    }

    #[test]
    fn missing_cells_share_one_group_key() {
        assert_eq!(Cell::Null.group_key(), GroupKey::Missing);
        assert_eq!(Cell::Blank.group_key(), GroupKey::Missing);
        assert_eq!(
            Cell::Text("a".to_string()).group_key(),
            GroupKey::Value("a".to_string())
        );
        assert_ne!(
            Cell::Text("0".to_string()).group_key(),
            GroupKey::Missing,
            "zero is not a missing value"
        );
    }

    #[test]
    fn numeric_fields_drop_trailing_zeros() {
        assert_eq!(format_numeric(1300.5), "1300.5");
        assert_eq!(format_numeric(2.0), "2");
        assert_eq!(format_numeric(-12.50), "-12.5");
        assert_eq!(format_numeric(0.0), "0");
    }

    #[test]
    fn missing_key_orders_before_values() {
        assert!(GroupKey::Missing < GroupKey::Value(String::new()));
    }

    #[test]
    fn cell_serializes_tagged() {
        let json = serde_json::to_string(&Cell::Text("a&b".to_string())).expect("serialize cell");
        let round: Cell = serde_json::from_str(&json).expect("deserialize cell");
        assert_eq!(round, Cell::Text("a&b".to_string()));
    }
}
