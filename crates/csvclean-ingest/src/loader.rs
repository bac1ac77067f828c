//! Delimiter-robust CSV loading.
//!
//! Files are parsed with each supported delimiter in a fixed priority order;
//! the first delimiter that yields a fully rectangular table (every record
//! with the same field count as the header) wins. There is no scoring pass:
//! first success stops the search.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use csvclean_model::{Cell, EngineError, Result, Table};

/// Supported field delimiters, in detection priority order.
pub const DELIMITERS: [u8; 2] = [b',', b';'];

/// Loads a CSV file into a [`Table`].
///
/// Fails with `UnreadableFile` when the path cannot be opened or read, and
/// with `UnparseableFile` when no supported delimiter produces a rectangular
/// table. Quoted fields (RFC 4180, including embedded delimiters and
/// newlines) are honored regardless of the active delimiter. Every loaded
/// cell is `Text` or `Blank`; numeric interpretation is left to the caller.
pub fn load_table(path: &Path) -> Result<Table> {
    let raw = std::fs::read_to_string(path).map_err(|source| EngineError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    let name = table_name(path);
    for delimiter in DELIMITERS {
        if let Some(table) = parse_with_delimiter(raw, delimiter, &name) {
            debug!(
                table = %table.name,
                delimiter = %char::from(delimiter),
                rows = table.row_count(),
                columns = table.columns.len(),
                "loaded csv table"
            );
            return Ok(table);
        }
    }
    Err(EngineError::UnparseableFile {
        path: path.to_path_buf(),
    })
}

/// Strict parse attempt with a single delimiter. Returns `None` when the
/// delimiter is rejected: a ragged record, a duplicate or missing header,
/// or any reader error.
fn parse_with_delimiter(raw: &str, delimiter: u8, name: &str) -> Option<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(raw.as_bytes());
    let headers = reader.headers().ok()?.clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return None;
    }
    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    if has_duplicate_names(&columns) {
        return None;
    }
    let mut table = Table::new(name, columns);
    for record in reader.records() {
        // A ragged record surfaces as an UnequalLengths error here.
        let record = record.ok()?;
        table.push_row(record.iter().map(Cell::from_raw).collect());
    }
    Some(table)
}

fn has_duplicate_names(columns: &[String]) -> bool {
    let mut seen = std::collections::BTreeSet::new();
    columns.iter().any(|name| !seen.insert(name.as_str()))
}

fn table_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("table")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_column_semicolon_file_parses_as_comma_first() {
        // A semicolon file with no commas is rectangular under the comma
        // delimiter too: priority order decides, so it loads as one column.
        let table = parse_with_delimiter("a;b\n1;2\n", b',', "t").expect("rectangular");
        assert_eq!(table.columns, vec!["a;b"]);
    }

    #[test]
    fn ragged_record_rejects_delimiter() {
        assert!(parse_with_delimiter("a,b\n1\n", b',', "t").is_none());
    }

    #[test]
    fn duplicate_headers_reject_delimiter() {
        assert!(parse_with_delimiter("a,a\n1,2\n", b',', "t").is_none());
    }

    #[test]
    fn empty_input_rejects_delimiter() {
        assert!(parse_with_delimiter("", b',', "t").is_none());
    }
}
