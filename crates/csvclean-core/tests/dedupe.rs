use csvclean_core::dedupe::dedupe;
use csvclean_model::{Cell, EngineError, Table};

fn table(rows: &[&[&str]]) -> Table {
    let mut table = Table::new("input", vec!["id".to_string(), "value".to_string()]);
    for row in rows {
        table.push_row(row.iter().map(|cell| Cell::from_raw(cell)).collect());
    }
    table
}

#[test]
fn keeps_first_occurrence_and_preserves_order() {
    let input = table(&[
        &["1", "first"],
        &["2", "second"],
        &["1", "late duplicate"],
        &["3", "third"],
    ]);
    let outcome = dedupe(&input, "id").expect("dedupe");
    assert_eq!(outcome.removed, 1);
    assert_eq!(outcome.table.row_count(), 3);
    assert_eq!(
        outcome.table.rows[0][1],
        Cell::Text("first".to_string()),
        "first occurrence wins"
    );
    assert_eq!(outcome.table.rows[1][1], Cell::Text("second".to_string()));
    assert_eq!(outcome.table.rows[2][1], Cell::Text("third".to_string()));
}

#[test]
fn retained_plus_removed_equals_input() {
    let input = table(&[&["a", "1"], &["a", "2"], &["b", "3"], &["a", "4"]]);
    let outcome = dedupe(&input, "id").expect("dedupe");
    assert_eq!(
        outcome.table.row_count() + outcome.removed,
        input.row_count()
    );
}

#[test]
fn dedupe_is_idempotent() {
    let input = table(&[&["a", "1"], &["a", "2"], &["b", "3"]]);
    let first = dedupe(&input, "id").expect("first pass");
    let second = dedupe(&first.table, "id").expect("second pass");
    assert_eq!(second.removed, 0);
    assert_eq!(second.table.rows, first.table.rows);
}

#[test]
fn blank_keys_collapse_to_one_row() {
    let input = table(&[&["", "kept"], &["  ", "dropped"], &["x", "other"]]);
    let outcome = dedupe(&input, "id").expect("dedupe");
    assert_eq!(outcome.removed, 1);
    assert_eq!(outcome.table.rows[0][1], Cell::Text("kept".to_string()));
}

#[test]
fn missing_key_column_names_table() {
    let input = table(&[&["a", "1"]]);
    let error = dedupe(&input, "key").expect_err("absent column");
    assert!(matches!(
        error,
        EngineError::MissingKeyColumn { ref table, ref column }
            if table == "input" && column == "key"
    ));
}
