//! Key-based left join of two tables.

use std::collections::BTreeMap;

use tracing::debug;

use csvclean_model::{Cell, GroupKey, Result, Table};

use crate::entities::decode_entities;

/// Left-joins `right` onto `left` by `key_column`.
///
/// The right table is collapsed first so each key maps to at most one row:
/// the first row in file order wins. Keys on both sides are compared after
/// HTML-entity decoding, so differently escaped but semantically identical
/// keys still match. Every left row appears exactly once in the output;
/// unmatched left rows get `Null` in every right-derived column. After the
/// join, every text cell of the result is entity-decoded.
///
/// Output columns are the left table's columns followed by the right
/// table's non-key columns, each side in its original order. Fails with
/// `MissingKeyColumn` naming the table that lacks the key.
pub fn merge(left: &Table, right: &Table, key_column: &str) -> Result<Table> {
    let left_key = left.require_column(key_column)?;
    let right_key = right.require_column(key_column)?;

    // First-wins collapse of the right table, keyed by decoded key text.
    let mut collapsed: BTreeMap<GroupKey, &Vec<Cell>> = BTreeMap::new();
    for row in &right.rows {
        collapsed
            .entry(decoded_key(&row[right_key]))
            .or_insert(row);
    }

    let right_value_columns: Vec<usize> = (0..right.columns.len())
        .filter(|&index| index != right_key)
        .collect();

    let mut columns = left.columns.clone();
    for &index in &right_value_columns {
        columns.push(right.columns[index].clone());
    }
    let mut output = Table::new(left.name.clone(), columns);

    let mut matched = 0usize;
    for row in &left.rows {
        let mut cells = row.clone();
        match collapsed.get(&decoded_key(&row[left_key])) {
            Some(right_row) => {
                matched += 1;
                for &index in &right_value_columns {
                    cells.push(right_row[index].clone());
                }
            }
            None => {
                for _ in &right_value_columns {
                    cells.push(Cell::Null);
                }
            }
        }
        output.push_row(decode_row(cells));
    }
    debug!(
        left = %left.name,
        right = %right.name,
        key = key_column,
        rows = output.row_count(),
        matched,
        "merged tables"
    );
    Ok(output)
}

/// Join key of a cell with character references resolved.
fn decoded_key(cell: &Cell) -> GroupKey {
    match cell.group_key() {
        GroupKey::Missing => GroupKey::Missing,
        GroupKey::Value(value) => GroupKey::Value(decode_entities(&value)),
    }
}

/// Entity-decodes every text cell of a joined row so the output is fully
/// unescaped, not just the key column.
fn decode_row(cells: Vec<Cell>) -> Vec<Cell> {
    cells
        .into_iter()
        .map(|cell| match cell {
            Cell::Text(text) => Cell::Text(decode_entities(&text)),
            other => other,
        })
        .collect()
}
