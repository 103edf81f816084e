//! Directive contract between the external classification layer and the
//! normalization engine.
//!
//! A [`FormatDirective`] is an immutable instruction describing how to
//! transform exactly one column. The engine never decides semantic types or
//! formatting parameters itself; it only executes directives. Unknown enum
//! values (for example a temporal pattern outside the fixed eight) are
//! rejected by serde at the deserialization boundary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "directive", rename_all = "snake_case")]
pub enum FormatDirective {
    /// Wipe declared placeholder strings and drop fully-empty rows/columns.
    SanitizeMissing {
        placeholders: BTreeSet<String>,
        drop_empty_rows: bool,
        drop_empty_columns: bool,
    },
    /// Canonicalize date/time text to one of the eight fixed patterns.
    Temporal {
        column: String,
        pattern: TemporalPattern,
    },
    /// Parse currency-bearing text into scaled numbers plus currency codes.
    Monetary {
        column: String,
        mixed_currency: bool,
        detected_currency: String,
        scale: DisplayScale,
        decimal_separator: DecimalSeparator,
    },
    /// Truncate values to nullable integers.
    Integer { column: String },
    /// Canonicalize floats with column-wide decimal padding.
    Float { column: String },
    /// Reorder and case human names / proper nouns.
    ProperNoun {
        column: String,
        entity: EntityType,
        dominant_order: NameOrder,
    },
}

impl FormatDirective {
    /// The target column, if the directive addresses a single column.
    ///
    /// `SanitizeMissing` operates on the whole table and returns `None`.
    pub fn column(&self) -> Option<&str> {
        match self {
            FormatDirective::SanitizeMissing { .. } => None,
            FormatDirective::Temporal { column, .. }
            | FormatDirective::Monetary { column, .. }
            | FormatDirective::Integer { column }
            | FormatDirective::Float { column }
            | FormatDirective::ProperNoun { column, .. } => Some(column),
        }
    }

    /// Short machine-readable name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            FormatDirective::SanitizeMissing { .. } => "sanitize_missing",
            FormatDirective::Temporal { .. } => "temporal",
            FormatDirective::Monetary { .. } => "monetary",
            FormatDirective::Integer { .. } => "integer",
            FormatDirective::Float { .. } => "float",
            FormatDirective::ProperNoun { .. } => "proper_noun",
        }
    }
}

/// The eight supported output patterns (day-before-month convention).
///
/// Serialized as the literal strftime string, so directive payloads carry
/// e.g. `"%d/%m/%Y"` and anything else fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemporalPattern {
    #[serde(rename = "%H:%M")]
    HourMinute,
    #[serde(rename = "%H:%M:%S")]
    HourMinuteSecond,
    #[serde(rename = "%S")]
    Second,
    #[serde(rename = "%d/%m/%Y")]
    DayMonthYear,
    #[serde(rename = "%d/%m/%Y %H:%M")]
    DayMonthYearHourMinute,
    #[serde(rename = "%d/%m/%Y %H:%M:%S")]
    DayMonthYearHourMinuteSecond,
    #[serde(rename = "%m/%Y")]
    MonthYear,
    #[serde(rename = "%Y")]
    Year,
}

impl TemporalPattern {
    pub const ALL: [TemporalPattern; 8] = [
        TemporalPattern::HourMinute,
        TemporalPattern::HourMinuteSecond,
        TemporalPattern::Second,
        TemporalPattern::DayMonthYear,
        TemporalPattern::DayMonthYearHourMinute,
        TemporalPattern::DayMonthYearHourMinuteSecond,
        TemporalPattern::MonthYear,
        TemporalPattern::Year,
    ];

    /// The chrono format string used for rendering.
    pub fn strftime(self) -> &'static str {
        match self {
            TemporalPattern::HourMinute => "%H:%M",
            TemporalPattern::HourMinuteSecond => "%H:%M:%S",
            TemporalPattern::Second => "%S",
            TemporalPattern::DayMonthYear => "%d/%m/%Y",
            TemporalPattern::DayMonthYearHourMinute => "%d/%m/%Y %H:%M",
            TemporalPattern::DayMonthYearHourMinuteSecond => "%d/%m/%Y %H:%M:%S",
            TemporalPattern::MonthYear => "%m/%Y",
            TemporalPattern::Year => "%Y",
        }
    }

    /// Resolves a literal strftime string, rejecting anything outside the
    /// fixed vocabulary.
    pub fn from_strftime(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.strftime() == value)
    }
}

/// Column-wide display scale ("report in millions"), distinct from per-cell
/// magnitude words like "100 million".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayScale {
    #[default]
    None,
    Thousands,
    Millions,
    Billions,
}

impl DisplayScale {
    pub fn divisor(self) -> Option<f64> {
        match self {
            DisplayScale::None => None,
            DisplayScale::Thousands => Some(1_000.0),
            DisplayScale::Millions => Some(1_000_000.0),
            DisplayScale::Billions => Some(1_000_000_000.0),
        }
    }

    /// Header annotation, e.g. `"in millions"`.
    pub fn label(self) -> Option<&'static str> {
        match self {
            DisplayScale::None => None,
            DisplayScale::Thousands => Some("in thousands"),
            DisplayScale::Millions => Some("in millions"),
            DisplayScale::Billions => Some("in billions"),
        }
    }
}

/// The decimal separator convention used by the raw data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecimalSeparator {
    #[default]
    Dot,
    Comma,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityType {
    HumanName,
    LocationOrOther,
}

/// Column-wide majority token order for two-token human names lacking a
/// comma separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameOrder {
    FirstLast,
    LastFirst,
    NotApplicable,
}
