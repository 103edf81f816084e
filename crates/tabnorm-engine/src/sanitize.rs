//! Missing-value sanitation: placeholder wiping and empty row/column drops.

use std::collections::BTreeSet;

use tabnorm_model::{CellValue, MutationResult, Table};

/// Scans the whole table for short punctuation-only strings that look like
/// missing-value placeholders ("-", ".", "?", "--", ...).
///
/// Advisory only: the result is surfaced to the external classifier, which
/// decides which strings actually get wiped.
pub fn detect_placeholder_candidates(table: &Table) -> BTreeSet<String> {
    let mut candidates = BTreeSet::new();
    for column in &table.columns {
        for cell in &column.cells {
            if let CellValue::Text(text) = cell {
                let trimmed = text.trim();
                if (1..=2).contains(&trimmed.len())
                    && trimmed.chars().all(|c| c.is_ascii_punctuation())
                {
                    candidates.insert(trimmed.to_string());
                }
            }
        }
    }
    candidates
}

/// Wipes declared placeholder strings to the missing marker, then optionally
/// drops all-missing rows and all-missing columns.
///
/// The wipe runs strictly before the drops: drops are defined over the
/// missing marker, not the original placeholder text. Only text cells are
/// compared against the placeholder set; numeric cells are left untouched.
pub fn sanitize(
    table: &mut Table,
    placeholders: &BTreeSet<String>,
    drop_empty_rows: bool,
    drop_empty_columns: bool,
) -> MutationResult {
    if table.width() == 0 || table.height() == 0 {
        return MutationResult::new("table is empty; nothing to sanitize");
    }

    let mut notes = Vec::new();

    if !placeholders.is_empty() {
        let mut wiped = 0usize;
        for column in &mut table.columns {
            for cell in &mut column.cells {
                if let CellValue::Text(text) = cell {
                    if placeholders.contains(text.trim()) {
                        *cell = CellValue::Missing;
                        wiped += 1;
                    }
                }
            }
        }
        notes.push(format!("wiped {wiped} placeholder cells"));
    }

    if drop_empty_rows {
        let keep: Vec<bool> = (0..table.height())
            .map(|row| table.columns.iter().any(|c| !c.cells[row].is_missing()))
            .collect();
        let removed = keep.iter().filter(|k| !**k).count();
        if removed > 0 {
            for column in &mut table.columns {
                let mut row = 0;
                column.cells.retain(|_| {
                    let kept = keep[row];
                    row += 1;
                    kept
                });
            }
            notes.push(format!("dropped {removed} empty rows"));
        }
    }

    if drop_empty_columns {
        let before = table.width();
        table.columns.retain(|c| !c.is_all_missing());
        let removed = before - table.width();
        if removed > 0 {
            notes.push(format!("dropped {removed} empty columns"));
        }
    }

    tracing::debug!(
        rows = table.height(),
        columns = table.width(),
        "sanitized table"
    );

    if notes.is_empty() {
        MutationResult::new("no changes")
    } else {
        MutationResult::new(notes.join("; "))
    }
}
