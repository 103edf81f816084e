use thiserror::Error;

/// Structural failures that abort a whole directive application.
///
/// Value-level problems (a single cell that cannot be parsed under the
/// declared semantic type) are never errors; the cell becomes
/// [`CellValue::Missing`](crate::table::CellValue::Missing) and processing
/// continues.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("column not found: '{0}'")]
    ColumnNotFound(String),
    #[error("malformed table: {0}")]
    MalformedTable(String),
    #[error("column already normalized: '{0}'")]
    ColumnAlreadyNormalized(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
