//! Deterministic column normalization engine.
//!
//! Rewrites the values of classifier-typed table columns into canonical
//! representations:
//!
//! - **sanitize**: placeholder wiping and empty row/column drops
//! - **temporal**: date/time text to one of eight fixed patterns
//! - **money**: currency-bearing text to scaled numbers plus currency codes
//! - **numeric**: integer truncation and padded float rendering
//! - **proper_noun**: name casing and token-order normalization
//! - **crop**: mechanical header promotion given decided coordinates
//! - **engine**: per-table [`ColumnEngine`] dispatching `FormatDirective`s
//!
//! The decision of which directive applies to which column is external;
//! this crate only executes directives and is fully deterministic.

pub mod crop;
pub mod engine;
pub mod money;
pub mod numeric;
pub mod proper_noun;
pub mod sanitize;
pub mod temporal;

pub use engine::ColumnEngine;
pub use sanitize::detect_placeholder_candidates;
