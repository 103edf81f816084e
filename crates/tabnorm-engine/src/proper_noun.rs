//! Proper-noun canonicalization: title casing plus human-name token
//! reordering.

use tabnorm_model::{
    CellValue, EngineError, EntityType, MutationResult, NameOrder, Result, Table,
};

/// Title-cases every alphabetic run: "o'brien, MARY jo" -> "O'Brien, Mary Jo".
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Reorders a title-cased human name.
///
/// A two-part comma split is read as "Last, First" and flipped. Without a
/// comma, a two-token name is flipped only when the column's dominant
/// order is LastFirst. Anything else passes through unchanged.
fn reorder_human_name(clean: &str, dominant_order: NameOrder) -> String {
    if clean.contains(',') {
        let parts: Vec<&str> = clean.split(',').map(str::trim).collect();
        if parts.len() == 2 {
            return format!("{} {}", parts[1], parts[0]);
        }
    }
    if dominant_order == NameOrder::LastFirst {
        let tokens: Vec<&str> = clean.split_whitespace().collect();
        if tokens.len() == 2 {
            return format!("{} {}", tokens[1], tokens[0]);
        }
    }
    clean.to_string()
}

/// Title-cases `column` and, for human names, normalizes token order to
/// "First Last".
pub fn format_proper_noun(
    table: &mut Table,
    column: &str,
    entity: EntityType,
    dominant_order: NameOrder,
) -> Result<MutationResult> {
    let col = table
        .column_mut(column)
        .ok_or_else(|| EngineError::ColumnNotFound(column.to_string()))?;

    let mut formatted = 0usize;
    for cell in &mut col.cells {
        let CellValue::Text(text) = cell else {
            continue;
        };
        let clean = title_case(text.trim());
        let value = match entity {
            EntityType::LocationOrOther => clean,
            EntityType::HumanName => reorder_human_name(&clean, dominant_order),
        };
        *cell = CellValue::Text(value);
        formatted += 1;
    }

    tracing::debug!(column, formatted, "proper noun column formatted");
    Ok(MutationResult::new(format!(
        "formatted proper noun column '{column}' ({formatted} values)"
    )))
}
