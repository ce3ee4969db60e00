use super::{Cell, Table, TableError};

#[test]
fn test_cells_decode_from_json_shapes() {
    let cells: Vec<Cell> = serde_json::from_str(r#"[0.98, 1, "N/A", null]"#).unwrap();
    assert_eq!(cells[0], Cell::Number(0.98));
    assert_eq!(cells[1], Cell::Number(1.0));
    assert_eq!(cells[2], Cell::Text("N/A".to_string()));
    assert_eq!(cells[3], Cell::Absent);
}

#[test]
fn test_cells_reject_other_shapes() {
    assert!(serde_json::from_str::<Cell>("true").is_err());
    assert!(serde_json::from_str::<Cell>("[1]").is_err());
    assert!(serde_json::from_str::<Cell>(r#"{"v":1}"#).is_err());
}

#[test]
fn test_match_text_is_lowercase() {
    assert_eq!(
        Cell::from("GPT-4-1106-Preview").as_match_text(),
        "gpt-4-1106-preview"
    );
    assert_eq!(Cell::Number(0.5).as_match_text(), "0.5");
    assert_eq!(Cell::Number(3.0).as_match_text(), "3");
    assert_eq!(Cell::Absent.as_match_text(), "");
}

#[test]
fn test_empty_headers_rejected() {
    assert_eq!(Table::new(Vec::new(), Vec::new()), Err(TableError::EmptyHeaders));
}

#[test]
fn test_short_rows_are_not_rejected_at_construction() {
    let table = Table::new(
        vec!["Model".to_string(), "Score".to_string()],
        vec![vec![Cell::from("a")], vec![Cell::from("b"), Cell::Number(0.1)]],
    )
    .unwrap();
    assert_eq!(table.width(), 2);
    assert_eq!(table.rows.len(), 2);
}
