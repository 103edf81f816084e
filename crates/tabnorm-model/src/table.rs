//! In-memory column-major table model.
//!
//! A [`Table`] is an ordered sequence of named columns; cells are aligned by
//! row index across columns. Every column must have the same length; shape
//! is checked by [`Table::validate`] before any directive touches the data.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A single cell: a present textual/numeric value or the missing marker.
///
/// `Missing` is the canonical "no value" state and is distinct from
/// `Text(String::new())`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Float(f64),
    Int(i64),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Borrows the textual content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Builds a column of text cells from plain strings.
    pub fn from_text(name: impl Into<String>, values: &[&str]) -> Self {
        Self::new(name, values.iter().map(|v| CellValue::text(*v)).collect())
    }

    pub fn is_all_missing(&self) -> bool {
        self.cells.iter().all(CellValue::is_missing)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from columns, rejecting unequal column lengths.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let table = Self { columns };
        table.validate()?;
        Ok(table)
    }

    /// Number of rows (length of the first column; zero for an empty table).
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// Checks the equal-length invariant across all columns.
    pub fn validate(&self) -> Result<()> {
        let height = self.height();
        for column in &self.columns {
            if column.cells.len() != height {
                return Err(EngineError::MalformedTable(format!(
                    "column '{}' has {} cells, expected {}",
                    column.name,
                    column.cells.len(),
                    height
                )));
            }
        }
        Ok(())
    }

    /// Inserts a column at `index`, rejecting a length mismatch.
    pub fn insert_column(&mut self, index: usize, column: Column) -> Result<()> {
        if !self.columns.is_empty() && column.cells.len() != self.height() {
            return Err(EngineError::MalformedTable(format!(
                "inserted column '{}' has {} cells, expected {}",
                column.name,
                column.cells.len(),
                self.height()
            )));
        }
        let index = index.min(self.columns.len());
        self.columns.insert(index, column);
        Ok(())
    }

    /// Returns a copy of the first `n` rows, for advisory previews.
    pub fn preview_rows(&self, n: usize) -> Table {
        Table {
            columns: self
                .columns
                .iter()
                .map(|c| Column::new(c.name.clone(), c.cells.iter().take(n).cloned().collect()))
                .collect(),
        }
    }
}
