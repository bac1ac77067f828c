//! Duplicate-key removal.

use std::collections::BTreeSet;

use tracing::debug;

use csvclean_model::{Result, Table};

/// Result of a dedupe pass. `table.row_count() + removed` equals the input
/// row count.
#[derive(Debug, Clone, PartialEq)]
pub struct DedupeOutcome {
    pub table: Table,
    pub removed: usize,
}

/// Collapses rows sharing a value in `key_column`, keeping the first row
/// observed per key and preserving the relative order of retained rows.
/// Null and blank keys count as the same value, so all rows with a missing
/// key collapse to the first of them.
pub fn dedupe(table: &Table, key_column: &str) -> Result<DedupeOutcome> {
    let key_index = table.require_column(key_column)?;
    let mut seen = BTreeSet::new();
    let mut output = Table::new(table.name.clone(), table.columns.clone());
    for row in &table.rows {
        if seen.insert(row[key_index].group_key()) {
            output.push_row(row.clone());
        }
    }
    let removed = table.row_count() - output.row_count();
    debug!(
        table = %table.name,
        key = key_column,
        before = table.row_count(),
        after = output.row_count(),
        removed,
        "removed duplicate rows"
    );
    Ok(DedupeOutcome {
        table: output,
        removed,
    })
}
