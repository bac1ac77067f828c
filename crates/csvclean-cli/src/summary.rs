//! Console rendering of tables and statistics.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use csvclean_core::audit::IssueReport;
use csvclean_core::aggregate::SumAggregation;
use csvclean_core::dedupe::DedupeOutcome;

/// Rows shown when printing a result table to the console.
const PREVIEW_ROWS: usize = 20;

pub fn print_table(table: &csvclean_model::Table) {
    let mut out = Table::new();
    out.set_header(table.columns.iter().map(|name| header_cell(name)));
    apply_table_style(&mut out);
    for row in table.rows.iter().take(PREVIEW_ROWS) {
        out.add_row(row.iter().map(|cell| Cell::new(cell.to_field())));
    }
    println!("{out}");
    if table.row_count() > PREVIEW_ROWS {
        println!(
            "... {} more rows (write with -o to keep the full table)",
            table.row_count() - PREVIEW_ROWS
        );
    }
}

pub fn print_sum_stats(result: &SumAggregation) {
    println!("Valid numbers: {}", result.valid_count);
    println!("Invalid values: {}", result.invalid.len());
    if result.invalid.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Row"), header_cell("Value")]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for entry in &result.invalid {
        table.add_row(vec![
            Cell::new(entry.row),
            Cell::new(&entry.raw).fg(Color::Yellow),
        ]);
    }
    println!("Invalid values by source row:");
    println!("{table}");
}

pub fn print_dedupe_stats(before: usize, outcome: &DedupeOutcome) {
    println!("Rows before removing duplicates: {before}");
    println!("Rows after removing duplicates: {}", outcome.table.row_count());
    println!("Duplicate rows removed: {}", outcome.removed);
}

pub fn print_audit_summary(report: &IssueReport) {
    if report.is_clean() {
        println!("Everything is okay. No missing or empty values were found.");
        return;
    }
    println!("Issues were found in the data:");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Missing"),
        header_cell("Empty after strip"),
        header_cell("Total"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    for entry in &report.columns {
        table.add_row(vec![
            Cell::new(&entry.column),
            count_cell(entry.missing),
            count_cell(entry.empty_after_strip),
            count_cell(entry.total()).add_attribute(Attribute::Bold),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: usize) -> Cell {
    if value > 0 {
        Cell::new(value).fg(Color::Yellow)
    } else {
        Cell::new(value).fg(Color::DarkGrey)
    }
}
