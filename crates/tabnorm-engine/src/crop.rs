//! Mechanical header-row promotion and left-column crop.
//!
//! Which row/column holds the true header is decided externally; this only
//! re-shapes the table for already-decided coordinates.

use tabnorm_model::{CellValue, EngineError, MutationResult, Result, Table};

fn promoted_name(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        CellValue::Float(v) => Some(v.to_string()),
        CellValue::Int(v) => Some(v.to_string()),
        CellValue::Missing => None,
    }
}

/// Promotes row `header_row_index` to column names, discards it and every
/// row above it, and drops the first `header_col_index` columns.
///
/// Blank promoted names keep the previous column name.
pub fn crop(
    table: &mut Table,
    header_row_index: usize,
    header_col_index: usize,
) -> Result<MutationResult> {
    table.validate()?;
    if header_row_index >= table.height() {
        return Err(EngineError::MalformedTable(format!(
            "header row {header_row_index} out of range for {} rows",
            table.height()
        )));
    }
    if header_col_index >= table.width() {
        return Err(EngineError::MalformedTable(format!(
            "header column {header_col_index} out of range for {} columns",
            table.width()
        )));
    }

    table.columns.drain(..header_col_index);
    for column in &mut table.columns {
        let header_cell = column.cells.drain(..=header_row_index).next_back();
        if let Some(name) = header_cell.as_ref().and_then(promoted_name) {
            column.name = name;
        }
    }

    tracing::debug!(
        rows = table.height(),
        columns = table.width(),
        "applied header and crop"
    );
    Ok(MutationResult::new(format!(
        "applied header at row {header_row_index}, cropped {header_col_index} columns; \
         shape is {} rows x {} columns",
        table.height(),
        table.width()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabnorm_model::Column;

    #[test]
    fn promotes_header_and_drops_leading_columns() {
        let mut table = Table::from_columns(vec![
            Column::from_text("0", &["", "x", "1", "2"]),
            Column::from_text("1", &["junk", "name", "alice", "bob"]),
            Column::from_text("2", &["junk", "city", "oslo", "lima"]),
        ])
        .unwrap();

        let result = crop(&mut table, 1, 1).unwrap();
        assert_eq!(table.column_names(), vec!["name", "city"]);
        assert_eq!(table.height(), 2);
        assert_eq!(table.columns[0].cells[0], CellValue::text("alice"));
        assert!(result.summary.contains("2 rows"));
    }

    #[test]
    fn blank_header_cell_keeps_old_name() {
        let mut table = Table::from_columns(vec![Column::new(
            "orig",
            vec![CellValue::Missing, CellValue::text("v")],
        )])
        .unwrap();
        crop(&mut table, 0, 0).unwrap();
        assert_eq!(table.column_names(), vec!["orig"]);
    }

    #[test]
    fn out_of_range_coordinates_fail() {
        let mut table =
            Table::from_columns(vec![Column::from_text("a", &["1", "2"])]).unwrap();
        assert!(matches!(
            crop(&mut table, 2, 0),
            Err(EngineError::MalformedTable(_))
        ));
        assert!(matches!(
            crop(&mut table, 0, 1),
            Err(EngineError::MalformedTable(_))
        ));
    }
}
