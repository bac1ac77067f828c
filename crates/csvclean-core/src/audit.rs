//! Missing-value auditing.

use std::fmt;

use csvclean_model::{Cell, Table};

/// Kind of data-quality issue found in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// The cell is null.
    Missing,
    /// The cell's text trims to the empty string.
    EmptyAfterStrip,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Missing => f.write_str("Missing value"),
            IssueKind::EmptyAfterStrip => f.write_str("Empty value after stripping"),
        }
    }
}

/// Per-column audit findings. Row numbers are 1-based source positions
/// counting the header as row 1, so the first data row is row 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIssues {
    pub column: String,
    pub missing: usize,
    pub empty_after_strip: usize,
    pub issues: Vec<(usize, IssueKind)>,
}

impl ColumnIssues {
    pub fn total(&self) -> usize {
        self.missing + self.empty_after_strip
    }
}

/// Audit findings for a whole table, in the table's column order. Columns
/// with zero issues are omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IssueReport {
    pub columns: Vec<ColumnIssues>,
}

impl IssueReport {
    pub fn is_clean(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Scans every column of the table for null and blank cells.
pub fn audit(table: &Table) -> IssueReport {
    let mut report = IssueReport::default();
    for (column_index, column) in table.columns.iter().enumerate() {
        let mut entry = ColumnIssues {
            column: column.clone(),
            missing: 0,
            empty_after_strip: 0,
            issues: Vec::new(),
        };
        for (row_index, row) in table.rows.iter().enumerate() {
            let kind = match &row[column_index] {
                Cell::Null => IssueKind::Missing,
                Cell::Blank => IssueKind::EmptyAfterStrip,
                Cell::Text(text) if text.trim().is_empty() => IssueKind::EmptyAfterStrip,
                _ => continue,
            };
            match kind {
                IssueKind::Missing => entry.missing += 1,
                IssueKind::EmptyAfterStrip => entry.empty_after_strip += 1,
            }
            entry.issues.push((row_index + 2, kind));
        }
        if entry.total() > 0 {
            report.columns.push(entry);
        }
    }
    report
}

/// Renders the detailed per-row report text, one section per column.
pub fn render_report(report: &IssueReport) -> String {
    let mut out = String::new();
    for column in &report.columns {
        out.push_str(&format!("Column: {}\n", column.column));
        for (row, kind) in &column.issues {
            out.push_str(&format!("  Row {row}: {kind}\n"));
        }
        out.push('\n');
    }
    out
}
