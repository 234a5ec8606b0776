//! Compat-matcher - composable compatibility checks with explanations.
//!
//! A [`Matcher`] decides whether an environment satisfies a requirement and,
//! when it does not, returns [`Mismatch`] diagnostics saying why. Matchers
//! compose with [`Conjunction`] (AND) and [`Disjunction`] (OR); the composites
//! decide which diagnostics surface when they fail.
//!
//! The environment is any type the leaf checks understand. Composites never
//! look at it.
//!
//! # Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`matcher`] - The matcher trait, combinators, and leaf adapters
//! - [`mismatch`] - Diagnostics and their rendering
//!
//! # Example
//!
//! ```
//! use compat_matcher::{check, Matcher, MatcherExt, Mismatch};
//!
//! struct Runtime {
//!     version: u32,
//!     features: Vec<&'static str>,
//! }
//!
//! let feature = |name: &'static str| {
//!     check(move |rt: &Runtime| {
//!         (!rt.features.contains(&name)).then(|| Mismatch::leaf(format!("Missing feature {}", name)))
//!     })
//! };
//! let modern = check(|rt: &Runtime| {
//!     (rt.version < 17).then(|| Mismatch::leaf(format!("Version {} is below 17", rt.version)))
//! });
//!
//! let gate = modern.or(feature("backport")).and(feature("threads"));
//!
//! let rt = Runtime { version: 11, features: vec!["threads"] };
//! assert!(!gate.matches(&rt));
//! assert_eq!(
//!     gate.mismatches(&rt)[0].describe(),
//!     "Failed both Version 11 is below 17 and Missing feature backport"
//! );
//! ```

pub mod error;
pub mod matcher;
pub mod mismatch;

pub use error::{MatcherError, Result};
pub use matcher::{
    all_of, any_of, check, try_check, BoxedMatcher, Check, Conjunction, Disjunction, Matcher,
    MatcherExt, Satisfied, TryCheck,
};
pub use mismatch::{join, LeafMismatch, Leaves, Mismatch};
