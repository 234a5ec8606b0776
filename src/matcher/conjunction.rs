//! Logical AND of two matchers.

use super::Matcher;
use crate::mismatch::Mismatch;
use tracing::trace;

/// Passes only when both children pass.
///
/// Both children are always evaluated. When both fail, their mismatches are
/// concatenated with the first child's entries first.
#[derive(Debug, Clone)]
pub struct Conjunction<A, B> {
    first: A,
    second: B,
}

impl<A, B> Conjunction<A, B> {
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

impl<E, A, B> Matcher<E> for Conjunction<A, B>
where
    E: ?Sized,
    A: Matcher<E>,
    B: Matcher<E>,
{
    fn matches(&self, env: &E) -> bool {
        let first = self.first.matches(env);
        let second = self.second.matches(env);
        first && second
    }

    fn mismatches(&self, env: &E) -> Vec<Mismatch> {
        let mut first = self.first.mismatches(env);
        let second = self.second.mismatches(env);
        if second.is_empty() {
            return first;
        }
        if first.is_empty() {
            return second;
        }
        trace!(
            first = first.len(),
            second = second.len(),
            "conjunction failed on both sides"
        );
        first.extend(second);
        first
    }
}
