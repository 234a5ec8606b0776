//! Error types for matcher construction and leaf evaluation.
//!
//! Evaluating a matcher tree never fails: every failure it reports is a
//! [`Mismatch`](crate::Mismatch). [`MatcherError`] covers the two places where
//! something can go wrong outside of that data channel:
//!
//! - Building a tree from a runtime list that cannot form a valid matcher
//! - A leaf check faulting, before it is folded into a mismatch

use thiserror::Error;

/// Core error type for matcher operations.
#[derive(Debug, Error)]
pub enum MatcherError {
    /// A disjunction needs at least one alternative to explain its failure.
    #[error("cannot build a disjunction from zero alternatives")]
    NoAlternatives,

    /// A leaf check faulted while inspecting the environment.
    #[error("evaluation failed: {source:#}")]
    Evaluation {
        requirement: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Result type alias for matcher operations.
pub type Result<T> = std::result::Result<T, MatcherError>;
