//! Logical OR of two matchers.

use super::Matcher;
use crate::mismatch::Mismatch;
use tracing::trace;

/// Passes when at least one child passes.
///
/// Both children are always evaluated. A satisfied disjunction reports no
/// mismatches at all, even if one branch failed. When both branches fail the
/// result is a single [`Mismatch::Disjunction`] holding each branch's
/// diagnostics.
#[derive(Debug, Clone)]
pub struct Disjunction<A, B> {
    first: A,
    second: B,
}

impl<A, B> Disjunction<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<E, A, B> Matcher<E> for Disjunction<A, B>
where
    E: ?Sized,
    A: Matcher<E>,
    B: Matcher<E>,
{
    fn matches(&self, env: &E) -> bool {
        let first = self.first.matches(env);
        let second = self.second.matches(env);
        first || second
    }

    fn mismatches(&self, env: &E) -> Vec<Mismatch> {
        let first = self.first.mismatches(env);
        let second = self.second.mismatches(env);
        if first.is_empty() || second.is_empty() {
            return Vec::new();
        }
        trace!(
            first = first.len(),
            second = second.len(),
            "disjunction failed on both branches"
        );
        vec![Mismatch::disjunction(first, second)]
    }
}
