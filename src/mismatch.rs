//! Diagnostics explaining why a matcher failed.
//!
//! A [`Mismatch`] is either a leaf, produced by an atomic check, or a
//! disjunction, produced when both alternatives of an OR failed. Descriptions
//! are computed recursively from the children.

use serde::Serialize;
use std::fmt;

/// A diagnostic describing one or more failed requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mismatch {
    /// A single failed requirement.
    Leaf(LeafMismatch),

    /// Both alternatives of a disjunction failed.
    Disjunction {
        /// Mismatches reported by the first alternative.
        first: Vec<Mismatch>,
        /// Mismatches reported by the second alternative.
        second: Vec<Mismatch>,
    },
}

/// A failed atomic requirement.
///
/// `sources` name the places that referenced the requirement. Only the first
/// one is rendered; the rest are kept for reporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafMismatch {
    pub sources: Vec<String>,
    pub details: String,
}

impl LeafMismatch {
    /// Create a leaf mismatch with no sources.
    ///
    /// # Example
    ///
    /// ```
    /// use compat_matcher::{LeafMismatch, Mismatch};
    ///
    /// let mismatch: Mismatch = LeafMismatch::new("Missing class org.example.Widget")
    ///     .with_source("WidgetAdvice:42")
    ///     .into();
    /// assert_eq!(
    ///     mismatch.describe(),
    ///     "WidgetAdvice:42 Missing class org.example.Widget"
    /// );
    /// ```
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            sources: Vec::new(),
            details: details.into(),
        }
    }

    /// Append a source label.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.sources.push(source.into());
        self
    }
}

impl Mismatch {
    /// Create a leaf mismatch with no sources.
    pub fn leaf(details: impl Into<String>) -> Self {
        LeafMismatch::new(details).into()
    }

    /// Create the composite reported when both branches of an OR failed.
    pub fn disjunction(first: Vec<Mismatch>, second: Vec<Mismatch>) -> Self {
        Mismatch::Disjunction { first, second }
    }

    /// Human-readable explanation of this mismatch.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Whether this is a leaf mismatch.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Mismatch::Leaf(_))
    }

    /// Iterate every leaf, depth first, first branch before second.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Leaf(leaf) => write!(f, "{}", leaf),
            Mismatch::Disjunction { first, second } => write!(
                f,
                "Failed both {} and {}",
                join(first, ", "),
                join(second, ", ")
            ),
        }
    }
}

impl fmt::Display for LeafMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sources.first() {
            Some(source) => write!(f, "{} {}", source, self.details),
            None => write!(f, "{}", self.details),
        }
    }
}

impl From<LeafMismatch> for Mismatch {
    fn from(leaf: LeafMismatch) -> Self {
        Mismatch::Leaf(leaf)
    }
}

/// Render each mismatch with its own description, separated by `separator`.
///
/// ```
/// use compat_matcher::{join, Mismatch};
///
/// let mismatches = [Mismatch::leaf("a"), Mismatch::leaf("b")];
/// assert_eq!(join(&mismatches, ", "), "a, b");
/// assert_eq!(join(&[], ", "), "");
/// ```
pub fn join(mismatches: &[Mismatch], separator: &str) -> String {
    mismatches
        .iter()
        .map(Mismatch::describe)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Depth-first iterator over the leaves of a mismatch.
pub struct Leaves<'a> {
    stack: Vec<&'a Mismatch>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a LeafMismatch;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mismatch) = self.stack.pop() {
            match mismatch {
                Mismatch::Leaf(leaf) => return Some(leaf),
                Mismatch::Disjunction { first, second } => {
                    // Reverse push so the first branch pops first.
                    self.stack.extend(second.iter().rev());
                    self.stack.extend(first.iter().rev());
                }
            }
        }
        None
    }
}
