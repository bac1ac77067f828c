#![deny(unsafe_code)]

use crate::cell::Cell;
use crate::error::{EngineError, Result};

/// An in-memory rectangular dataset. Column order is insertion order and
/// defines output order; every row holds exactly one cell per column.
///
/// Tables are built once (by the loader or by an operation producing a new
/// table) and treated as immutable afterwards; operations take `&Table` and
/// return fresh values.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    /// Label used in diagnostics, usually the source file stem.
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == column)
    }

    /// Resolves a column name, failing with `MissingKeyColumn` naming this
    /// table when the column is absent.
    pub fn require_column(&self, column: &str) -> Result<usize> {
        self.column_index(column)
            .ok_or_else(|| EngineError::MissingKeyColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }
}
