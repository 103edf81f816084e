//! Data model for the tabnorm column normalization engine.
//!
//! - **table**: column-major [`Table`] of [`CellValue`] cells
//! - **directive**: the [`FormatDirective`] contract consumed from the
//!   external classification layer
//! - **outcome**: per-application [`MutationResult`]
//! - **error**: structural [`EngineError`] variants

pub mod directive;
pub mod error;
pub mod outcome;
pub mod table;

pub use directive::{
    DecimalSeparator, DisplayScale, EntityType, FormatDirective, NameOrder, TemporalPattern,
};
pub use error::{EngineError, Result};
pub use outcome::MutationResult;
pub use table::{CellValue, Column, Table};
