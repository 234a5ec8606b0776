//! The matcher capability and its combinators.
//!
//! # Modules
//!
//! - [`conjunction`] - AND of two matchers
//! - [`disjunction`] - OR of two matchers
//! - [`leaf`] - Adapters turning closures into leaf matchers
//! - [`fold`] - Building trees from runtime lists

pub mod conjunction;
pub mod disjunction;
pub mod fold;
pub mod leaf;

use crate::mismatch::Mismatch;
use std::sync::Arc;

pub use conjunction::Conjunction;
pub use disjunction::Disjunction;
pub use fold::{all_of, any_of};
pub use leaf::{check, try_check, Check, Satisfied, TryCheck};

/// A requirement checked against an environment `E`.
///
/// Implementations must keep `matches(env) == mismatches(env).is_empty()`
/// for every environment, must not mutate shared state, and must turn any
/// fault into a mismatch rather than panicking.
pub trait Matcher<E: ?Sized>: Send + Sync {
    /// Whether the environment satisfies this requirement.
    fn matches(&self, env: &E) -> bool;

    /// Why the environment does not satisfy this requirement. Empty on success.
    fn mismatches(&self, env: &E) -> Vec<Mismatch>;
}

/// A type-erased matcher.
pub type BoxedMatcher<E> = Box<dyn Matcher<E>>;

impl<E: ?Sized, M: Matcher<E> + ?Sized> Matcher<E> for &M {
    fn matches(&self, env: &E) -> bool {
        (**self).matches(env)
    }

    fn mismatches(&self, env: &E) -> Vec<Mismatch> {
        (**self).mismatches(env)
    }
}

impl<E: ?Sized, M: Matcher<E> + ?Sized> Matcher<E> for Box<M> {
    fn matches(&self, env: &E) -> bool {
        (**self).matches(env)
    }

    fn mismatches(&self, env: &E) -> Vec<Mismatch> {
        (**self).mismatches(env)
    }
}

impl<E: ?Sized, M: Matcher<E> + ?Sized> Matcher<E> for Arc<M> {
    fn matches(&self, env: &E) -> bool {
        (**self).matches(env)
    }

    fn mismatches(&self, env: &E) -> Vec<Mismatch> {
        (**self).mismatches(env)
    }
}

/// Builder-style combinators available on every matcher.
///
/// ```
/// use compat_matcher::{check, Matcher, MatcherExt, Mismatch};
///
/// let has_a = check(|env: &str| (!env.contains('a')).then(|| Mismatch::leaf("no a")));
/// let has_b = check(|env: &str| (!env.contains('b')).then(|| Mismatch::leaf("no b")));
/// let either = has_a.or(has_b);
///
/// assert!(either.matches("b"));
/// assert_eq!(either.mismatches("c")[0].describe(), "Failed both no a and no b");
/// ```
pub trait MatcherExt<E: ?Sized>: Matcher<E> + Sized {
    /// Require both `self` and `other`.
    fn and<M: Matcher<E>>(self, other: M) -> Conjunction<Self, M> {
        Conjunction::new(self, other)
    }

    /// Require either `self` or `other`.
    fn or<M: Matcher<E>>(self, other: M) -> Disjunction<Self, M> {
        Disjunction::new(self, other)
    }

    /// Erase the concrete type.
    fn boxed(self) -> BoxedMatcher<E>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<E: ?Sized, M: Matcher<E>> MatcherExt<E> for M {}
