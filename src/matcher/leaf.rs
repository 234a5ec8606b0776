//! Leaf matchers built from closures.
//!
//! Domain checks live outside this crate. These adapters let a caller express
//! one as a function of the environment while keeping the matcher contract:
//! `matches` agrees with `mismatches`, and faults become mismatches.

use super::Matcher;
use crate::error::MatcherError;
use crate::mismatch::{LeafMismatch, Mismatch};
use tracing::debug;

/// A matcher that passes for every environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Satisfied;

impl<E: ?Sized> Matcher<E> for Satisfied {
    fn matches(&self, _env: &E) -> bool {
        true
    }

    fn mismatches(&self, _env: &E) -> Vec<Mismatch> {
        Vec::new()
    }
}

/// Leaf matcher backed by a check returning `Some(mismatch)` on failure.
#[derive(Clone)]
pub struct Check<F> {
    check: F,
}

/// Build a leaf from a check function.
///
/// ```
/// use compat_matcher::{check, Matcher, Mismatch};
///
/// let positive = check(|n: &i32| (*n <= 0).then(|| Mismatch::leaf("not positive")));
/// assert!(positive.matches(&3));
/// assert_eq!(positive.mismatches(&-1)[0].describe(), "not positive");
/// ```
pub fn check<E, F>(check: F) -> Check<F>
where
    E: ?Sized,
    F: Fn(&E) -> Option<Mismatch> + Send + Sync,
{
    Check { check }
}

impl<E, F> Matcher<E> for Check<F>
where
    E: ?Sized,
    F: Fn(&E) -> Option<Mismatch> + Send + Sync,
{
    fn matches(&self, env: &E) -> bool {
        (self.check)(env).is_none()
    }

    fn mismatches(&self, env: &E) -> Vec<Mismatch> {
        (self.check)(env).into_iter().collect()
    }
}

impl<F> std::fmt::Debug for Check<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check").finish_non_exhaustive()
    }
}

/// Leaf matcher backed by a check that may fault.
#[derive(Clone)]
pub struct TryCheck<F> {
    requirement: String,
    check: F,
}

/// Build a leaf from a fallible check function.
///
/// An `Err` is not propagated: the leaf fails with a single mismatch sourced
/// at `requirement`. The fault is re-evaluated on every `matches` and
/// `mismatches` call and logged at `debug` each time; reporting it to users is
/// left to whoever renders the mismatch.
///
/// ```
/// use compat_matcher::{try_check, Matcher};
///
/// let config = try_check("config-file", |_: &()| Err(anyhow::anyhow!("unreadable")));
/// assert!(!config.matches(&()));
/// assert_eq!(
///     config.mismatches(&())[0].describe(),
///     "config-file evaluation failed: unreadable"
/// );
/// ```
pub fn try_check<E, F>(requirement: impl Into<String>, check: F) -> TryCheck<F>
where
    E: ?Sized,
    F: Fn(&E) -> anyhow::Result<Option<Mismatch>> + Send + Sync,
{
    TryCheck {
        requirement: requirement.into(),
        check,
    }
}

impl<F> TryCheck<F> {
    /// Name of the requirement this leaf checks.
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    fn evaluate<E: ?Sized>(&self, env: &E) -> Option<Mismatch>
    where
        F: Fn(&E) -> anyhow::Result<Option<Mismatch>>,
    {
        match (self.check)(env) {
            Ok(outcome) => outcome,
            Err(source) => {
                let err = MatcherError::Evaluation {
                    requirement: self.requirement.clone(),
                    source,
                };
                debug!("Requirement '{}' could not be checked: {}", self.requirement, err);
                Some(
                    LeafMismatch::new(err.to_string())
                        .with_source(self.requirement.clone())
                        .into(),
                )
            }
        }
    }
}

impl<E, F> Matcher<E> for TryCheck<F>
where
    E: ?Sized,
    F: Fn(&E) -> anyhow::Result<Option<Mismatch>> + Send + Sync,
{
    fn matches(&self, env: &E) -> bool {
        self.evaluate(env).is_none()
    }

    fn mismatches(&self, env: &E) -> Vec<Mismatch> {
        self.evaluate(env).into_iter().collect()
    }
}

impl<F> std::fmt::Debug for TryCheck<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryCheck")
            .field("requirement", &self.requirement)
            .finish_non_exhaustive()
    }
}
