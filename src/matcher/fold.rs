//! Build matcher trees from runtime lists.
//!
//! Both functions left-fold the binary combinators, so `[a, b, c]` becomes
//! `(a AND b) AND c`. Diagnostics therefore keep list order.

use super::{BoxedMatcher, Conjunction, Disjunction, MatcherExt, Satisfied};
use crate::error::{MatcherError, Result};

/// Require every matcher in the list. An empty list is always satisfied.
pub fn all_of<E, I>(matchers: I) -> BoxedMatcher<E>
where
    E: ?Sized + 'static,
    I: IntoIterator<Item = BoxedMatcher<E>>,
{
    matchers
        .into_iter()
        .reduce(|acc, next| Conjunction::new(acc, next).boxed())
        .unwrap_or_else(|| Satisfied.boxed())
}

/// Require at least one matcher in the list.
///
/// Fails with [`MatcherError::NoAlternatives`] on an empty list: such a
/// disjunction could never pass and would have nothing to explain.
pub fn any_of<E, I>(matchers: I) -> Result<BoxedMatcher<E>>
where
    E: ?Sized + 'static,
    I: IntoIterator<Item = BoxedMatcher<E>>,
{
    matchers
        .into_iter()
        .reduce(|acc, next| Disjunction::new(acc, next).boxed())
        .ok_or(MatcherError::NoAlternatives)
}
