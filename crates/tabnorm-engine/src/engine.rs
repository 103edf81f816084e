//! Per-table directive dispatch.

use std::collections::BTreeSet;

use tabnorm_model::{EngineError, FormatDirective, MutationResult, Result, Table};

use crate::{money, numeric, proper_noun, sanitize, temporal};

/// Applies directives to one table, dispatching to the type-specific
/// canonicalizers and the sanitizer.
///
/// Monetary and temporal formatting are not idempotent (re-running would
/// mis-parse already-annotated headers and already-scaled values), so the
/// engine records every type-formatted column and rejects re-application
/// with [`EngineError::ColumnAlreadyNormalized`]. Sanitization is not
/// tracked and may run repeatedly. Create one `ColumnEngine` per table
/// processing session.
#[derive(Debug, Default)]
pub struct ColumnEngine {
    applied: BTreeSet<String>,
}

impl ColumnEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Columns already normalized in this session.
    pub fn applied_columns(&self) -> impl Iterator<Item = &str> {
        self.applied.iter().map(String::as_str)
    }

    pub fn apply(
        &mut self,
        table: &mut Table,
        directive: &FormatDirective,
    ) -> Result<MutationResult> {
        table.validate()?;
        if let Some(column) = directive.column() {
            if self.applied.contains(column) {
                return Err(EngineError::ColumnAlreadyNormalized(column.to_string()));
            }
        }

        let result = match directive {
            FormatDirective::SanitizeMissing {
                placeholders,
                drop_empty_rows,
                drop_empty_columns,
            } => Ok(sanitize::sanitize(
                table,
                placeholders,
                *drop_empty_rows,
                *drop_empty_columns,
            )),
            FormatDirective::Temporal { column, pattern } => {
                temporal::format_temporal(table, column, *pattern)
            }
            FormatDirective::Monetary {
                column,
                mixed_currency,
                detected_currency,
                scale,
                decimal_separator,
            } => money::format_money(
                table,
                column,
                *mixed_currency,
                detected_currency,
                *scale,
                *decimal_separator,
            ),
            FormatDirective::Integer { column } => numeric::format_integer(table, column),
            FormatDirective::Float { column } => numeric::format_float(table, column),
            FormatDirective::ProperNoun {
                column,
                entity,
                dominant_order,
            } => proper_noun::format_proper_noun(table, column, *entity, *dominant_order),
        }?;

        if let Some(column) = directive.column() {
            self.applied.insert(column.to_string());
        }
        tracing::info!(
            directive = directive.kind(),
            summary = %result.summary,
            "directive applied"
        );
        Ok(result)
    }
}
