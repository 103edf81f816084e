use serde::{Deserialize, Serialize};

/// Outcome of one successful directive application.
///
/// Structural failures are reported through
/// [`EngineError`](crate::error::EngineError) instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResult {
    /// Human-readable summary of what happened.
    pub summary: String,
    /// Name of the companion currency column, when mixed-currency monetary
    /// formatting inserted one.
    pub companion_column: Option<String>,
}

impl MutationResult {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            companion_column: None,
        }
    }

    pub fn with_companion(summary: impl Into<String>, companion: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            companion_column: Some(companion.into()),
        }
    }
}
