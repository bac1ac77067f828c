//! Group-by aggregation: row counts and normalized numeric sums.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use csvclean_model::{Cell, GroupKey, Result, Table};

use crate::numeric::{NormalizedNumber, normalize};

/// One output row of a count aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRow {
    pub key: GroupKey,
    pub count: usize,
}

/// One output row of a sum aggregation. A group whose rows hold no valid
/// numeric value sums to 0, never to a missing marker.
#[derive(Debug, Clone, PartialEq)]
pub struct SumRow {
    pub key: GroupKey,
    pub sum: f64,
}

/// A value-column cell that did not normalize, by 1-based source row
/// number (header line is row 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntry {
    pub row: usize,
    pub raw: String,
}

/// Sum aggregation output plus the statistics the caller may present.
/// `valid_count + invalid.len()` always equals the table's row count.
#[derive(Debug, Clone, PartialEq)]
pub struct SumAggregation {
    pub rows: Vec<SumRow>,
    pub valid_count: usize,
    pub invalid: Vec<InvalidEntry>,
}

impl SumAggregation {
    /// Renders the aggregation as a writable table with the group column
    /// followed by a `Sum` column.
    pub fn to_table(&self, group_column: &str) -> Table {
        let mut table = Table::new(
            "aggregated",
            vec![group_column.to_string(), "Sum".to_string()],
        );
        for row in &self.rows {
            table.push_row(vec![row.key.to_cell(), Cell::Numeric(row.sum)]);
        }
        table
    }
}

/// Groups rows by the distinct values of `group_column` and counts each
/// group's rows. Missing cells (null or blank) form a group of their own.
/// Output is ordered by the key's natural ascending order.
pub fn aggregate_count(table: &Table, group_column: &str) -> Result<Vec<CountRow>> {
    let key_index = table.require_column(group_column)?;
    let mut counts: BTreeMap<GroupKey, usize> = BTreeMap::new();
    for row in &table.rows {
        *counts.entry(row[key_index].group_key()).or_default() += 1;
    }
    let mut rows: Vec<CountRow> = counts
        .into_iter()
        .map(|(key, count)| CountRow { key, count })
        .collect();
    sort_by_natural_key(&mut rows, |row| &row.key);
    debug!(table = %table.name, group = group_column, groups = rows.len(), "counted groups");
    Ok(rows)
}

/// Sums the normalized values of `value_column` per distinct key of
/// `group_column`. Cells that fail normalization never abort the
/// aggregation; they are collected in input order with their source row
/// numbers and returned alongside the sums.
pub fn aggregate_sum(
    table: &Table,
    group_column: &str,
    value_column: &str,
) -> Result<SumAggregation> {
    let key_index = table.require_column(group_column)?;
    let value_index = table.require_column(value_column)?;
    let mut sums: BTreeMap<GroupKey, f64> = BTreeMap::new();
    let mut valid_count = 0usize;
    let mut invalid = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        let key = row[key_index].group_key();
        let sum = sums.entry(key).or_insert(0.0);
        match normalize(&row[value_index]) {
            NormalizedNumber::Valid(value) => {
                *sum += value;
                valid_count += 1;
            }
            NormalizedNumber::Invalid(raw) => invalid.push(InvalidEntry {
                // Source-file position: header is row 1, first data row is 2.
                row: index + 2,
                raw,
            }),
        }
    }
    let mut rows: Vec<SumRow> = sums
        .into_iter()
        .map(|(key, sum)| SumRow { key, sum })
        .collect();
    sort_by_natural_key(&mut rows, |row| &row.key);
    debug!(
        table = %table.name,
        group = group_column,
        value = value_column,
        groups = rows.len(),
        valid = valid_count,
        invalid = invalid.len(),
        "summed groups"
    );
    Ok(SumAggregation {
        rows,
        valid_count,
        invalid,
    })
}

/// Renders a count aggregation as a writable table with the group column
/// followed by a `Row Count` column.
pub fn count_rows_to_table(rows: &[CountRow], group_column: &str) -> Table {
    let mut table = Table::new(
        "aggregated",
        vec![group_column.to_string(), "Row Count".to_string()],
    );
    for row in rows {
        table.push_row(vec![row.key.to_cell(), Cell::Numeric(row.count as f64)]);
    }
    table
}

/// Orders aggregation rows by the key's comparison type: numeric ascending
/// when every present key parses as a number, lexicographic otherwise. The
/// missing-value group, when present, sorts first in either mode.
fn sort_by_natural_key<T>(rows: &mut [T], key_of: impl Fn(&T) -> &GroupKey) {
    let all_numeric = rows.iter().all(|row| match key_of(row) {
        GroupKey::Missing => true,
        GroupKey::Value(value) => value.trim().parse::<f64>().is_ok(),
    });
    rows.sort_by(|a, b| match (key_of(a), key_of(b)) {
        (GroupKey::Missing, GroupKey::Missing) => Ordering::Equal,
        (GroupKey::Missing, GroupKey::Value(_)) => Ordering::Less,
        (GroupKey::Value(_), GroupKey::Missing) => Ordering::Greater,
        (GroupKey::Value(a), GroupKey::Value(b)) => {
            if all_numeric {
                let left: f64 = a.trim().parse().unwrap_or(f64::NAN);
                let right: f64 = b.trim().parse().unwrap_or(f64::NAN);
                left.partial_cmp(&right).unwrap_or(Ordering::Equal)
            } else {
                a.cmp(b)
            }
        }
    });
}
