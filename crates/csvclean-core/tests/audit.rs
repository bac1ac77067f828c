use csvclean_core::audit::{IssueKind, audit, render_report};
use csvclean_model::{Cell, Table};

#[test]
fn reports_missing_and_blank_cells_by_source_row() {
    // Rows ("1","Alice"), ("2",""), ("3", null): one blank, one null.
    let mut table = Table::new("people", vec!["id".to_string(), "name".to_string()]);
    table.push_row(vec![Cell::from_raw("1"), Cell::from_raw("Alice")]);
    table.push_row(vec![Cell::from_raw("2"), Cell::from_raw("")]);
    table.push_row(vec![Cell::from_raw("3"), Cell::Null]);

    let report = audit(&table);
    assert!(!report.is_clean());
    assert_eq!(report.columns.len(), 1, "clean columns are omitted");

    let name = &report.columns[0];
    assert_eq!(name.column, "name");
    assert_eq!(name.missing, 1);
    assert_eq!(name.empty_after_strip, 1);
    assert_eq!(name.total(), 2);
    assert_eq!(
        name.issues,
        vec![(3, IssueKind::EmptyAfterStrip), (4, IssueKind::Missing)]
    );
}

#[test]
fn clean_table_yields_empty_report() {
    let mut table = Table::new("t", vec!["a".to_string()]);
    table.push_row(vec![Cell::from_raw("1")]);
    table.push_row(vec![Cell::from_raw("2")]);
    let report = audit(&table);
    assert!(report.is_clean());
    assert_eq!(render_report(&report), "");
}

#[test]
fn report_columns_follow_table_column_order() {
    let mut table = Table::new(
        "t",
        vec!["z".to_string(), "a".to_string(), "m".to_string()],
    );
    table.push_row(vec![Cell::Blank, Cell::from_raw("ok"), Cell::Null]);
    let report = audit(&table);
    let columns: Vec<&str> = report
        .columns
        .iter()
        .map(|entry| entry.column.as_str())
        .collect();
    assert_eq!(columns, vec!["z", "m"]);
}

#[test]
fn renders_detailed_report_text() {
    let mut table = Table::new("t", vec!["name".to_string()]);
    table.push_row(vec![Cell::Blank]);
    table.push_row(vec![Cell::Null]);
    let rendered = render_report(&audit(&table));
    assert_eq!(
        rendered,
        "Column: name\n  Row 2: Empty value after stripping\n  Row 3: Missing value\n\n"
    );
}
