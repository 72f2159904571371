//! Core error types (deterministic only)

use thiserror::Error;

/// Errors produced by the core algorithms (no I/O, no external failures).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A pattern rule was constructed without elements.
    #[error("pattern rule '{rule_id}' has no elements")]
    EmptyPattern {
        /// Identifier of the offending rule
        rule_id: String,
    },

    /// Repetition bounds are inverted.
    #[error("invalid repetition bounds: min {min} > max {max}")]
    InvalidRepetition {
        /// Minimum repetition count
        min: usize,
        /// Maximum repetition count
        max: usize,
    },

    /// A suggestion template references an element the rule does not have.
    #[error("suggestion references element {index}, but the rule has {element_count} elements")]
    InvalidSuggestionReference {
        /// Referenced element index
        index: usize,
        /// Number of elements in the rule
        element_count: usize,
    },

    /// The caller-imposed matching budget ran out before the scan finished.
    #[error("match budget of {budget} steps exhausted")]
    BudgetExhausted {
        /// The budget that was exceeded
        budget: usize,
    },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
