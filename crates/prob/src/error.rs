//! Error types for probability queries.

use thiserror::Error;

/// Errors that can occur when querying a model.
///
/// Unknown categories and attributes are not errors: they read as zero counts
/// and flow through the smoothing formula like any other key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbError {
    /// A smoothed estimate has a zero denominator (`total + k * groups == 0`).
    #[error(
        "Smoothed estimate undefined: count {count} over total {total} with {groups} groups and k = {k}"
    )]
    UndefinedEstimate {
        count: u64,
        total: u64,
        groups: u64,
        k: u64,
    },

    /// The posterior normalizer summed to zero.
    #[error("Cannot normalize posterior: evidence has zero probability across {categories} known categories")]
    ZeroEvidence { categories: usize },
}
