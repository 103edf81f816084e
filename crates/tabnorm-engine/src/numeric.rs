//! Numeric canonicalization: integer truncation and float rendering with
//! column-wide decimal padding.

use tabnorm_model::{CellValue, EngineError, MutationResult, Result, Table};

fn parse_text_number(text: &str) -> Option<f64> {
    let cleaned = text.to_lowercase().replace(',', "");
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Fractional width of a value's shortest decimal rendering; `2.0` is 0,
/// `3.25` is 2.
fn decimal_width(value: f64) -> usize {
    let rendered = format!("{value}");
    match rendered.split_once('.') {
        Some((_, fraction)) => fraction.len(),
        None => 0,
    }
}

/// Truncates every cell of `column` to a nullable integer.
///
/// Already-integer cells are left alone, so re-applying to an integer
/// column is a no-op.
pub fn format_integer(table: &mut Table, column: &str) -> Result<MutationResult> {
    let col = table
        .column_mut(column)
        .ok_or_else(|| EngineError::ColumnNotFound(column.to_string()))?;

    let mut converted = 0usize;
    let mut unparsed = 0usize;
    for cell in &mut col.cells {
        match cell {
            CellValue::Missing | CellValue::Int(_) => {}
            CellValue::Float(v) => {
                *cell = CellValue::Int(*v as i64);
                converted += 1;
            }
            CellValue::Text(s) => {
                *cell = match parse_text_number(s) {
                    Some(v) => {
                        converted += 1;
                        CellValue::Int(v as i64)
                    }
                    None => {
                        unparsed += 1;
                        CellValue::Missing
                    }
                };
            }
        }
    }

    tracing::debug!(column, converted, unparsed, "integer column formatted");
    Ok(MutationResult::new(format!(
        "formatted integer column '{column}' ({converted} values, {unparsed} unparseable)"
    )))
}

/// Parses every cell of `column` as a float, then renders all values as
/// text padded to the widest fractional width observed in the column.
pub fn format_float(table: &mut Table, column: &str) -> Result<MutationResult> {
    let col = table
        .column_mut(column)
        .ok_or_else(|| EngineError::ColumnNotFound(column.to_string()))?;

    let parsed: Vec<Option<f64>> = col
        .cells
        .iter()
        .map(|cell| match cell {
            CellValue::Missing => None,
            CellValue::Float(v) => Some(*v),
            CellValue::Int(v) => Some(*v as f64),
            CellValue::Text(s) => parse_text_number(s),
        })
        .collect();

    let max_decimals = parsed
        .iter()
        .flatten()
        .map(|v| decimal_width(*v))
        .max()
        .unwrap_or(0);

    for (cell, value) in col.cells.iter_mut().zip(&parsed) {
        *cell = match value {
            Some(v) => CellValue::Text(format!("{v:.max_decimals$}")),
            None => CellValue::Missing,
        };
    }

    tracing::debug!(column, max_decimals, "float column formatted");
    Ok(MutationResult::new(format!(
        "formatted float column '{column}' to {max_decimals} decimal places"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_thousands_grouping() {
        assert_eq!(parse_text_number("1,234,567"), Some(1_234_567.0));
        assert_eq!(parse_text_number("  42 "), Some(42.0));
        assert_eq!(parse_text_number("abc"), None);
        assert_eq!(parse_text_number("nan"), None);
    }

    #[test]
    fn decimal_width_uses_shortest_rendering() {
        assert_eq!(decimal_width(2.0), 0);
        assert_eq!(decimal_width(1.5), 1);
        assert_eq!(decimal_width(3.25), 2);
        assert_eq!(decimal_width(-0.125), 3);
    }
}
