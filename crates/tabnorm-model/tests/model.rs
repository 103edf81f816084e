//! Tests for tabnorm-model table types.

use tabnorm_model::{CellValue, Column, EngineError, Table};

fn sample_table() -> Table {
    Table::from_columns(vec![
        Column::from_text("name", &["alice", "bob", "carol"]),
        Column::new(
            "score",
            vec![CellValue::Int(1), CellValue::Missing, CellValue::Int(3)],
        ),
    ])
    .expect("valid table")
}

#[test]
fn equal_length_invariant_enforced() {
    let result = Table::from_columns(vec![
        Column::from_text("a", &["1", "2"]),
        Column::from_text("b", &["1"]),
    ]);
    assert!(matches!(result, Err(EngineError::MalformedTable(_))));
}

#[test]
fn height_and_width() {
    let table = sample_table();
    assert_eq!(table.height(), 3);
    assert_eq!(table.width(), 2);
    assert_eq!(Table::new().height(), 0);
}

#[test]
fn column_lookup() {
    let table = sample_table();
    assert_eq!(table.column_names(), vec!["name", "score"]);
    assert_eq!(table.column_index("score"), Some(1));
    assert_eq!(table.column_index("missing"), None);
    assert!(table.column("name").is_some());
}

#[test]
fn insert_column_rejects_length_mismatch() {
    let mut table = sample_table();
    let result = table.insert_column(1, Column::from_text("extra", &["x"]));
    assert!(matches!(result, Err(EngineError::MalformedTable(_))));

    table
        .insert_column(1, Column::from_text("extra", &["x", "y", "z"]))
        .expect("matching length");
    assert_eq!(table.column_names(), vec!["name", "extra", "score"]);
}

#[test]
fn preview_rows_copies_prefix() {
    let table = sample_table();
    let preview = table.preview_rows(2);
    assert_eq!(preview.height(), 2);
    assert_eq!(preview.width(), 2);
    assert_eq!(
        preview.columns[0].cells[1],
        CellValue::Text("bob".to_string())
    );
    // Original is untouched.
    assert_eq!(table.height(), 3);
}

#[test]
fn missing_is_distinct_from_empty_text() {
    assert!(CellValue::Missing.is_missing());
    assert!(!CellValue::text("").is_missing());
    assert_eq!(CellValue::text("").as_text(), Some(""));
    assert_eq!(CellValue::Missing.as_text(), None);
}

#[test]
fn cell_value_serde_round_trip() {
    let cells = vec![
        CellValue::text("hello"),
        CellValue::Float(1.5),
        CellValue::Int(-3),
        CellValue::Missing,
    ];
    let json = serde_json::to_string(&cells).expect("serialize cells");
    let round: Vec<CellValue> = serde_json::from_str(&json).expect("deserialize cells");
    assert_eq!(round, cells);
}
