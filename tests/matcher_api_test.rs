//! Public API integration tests.

use compat_matcher::{
    all_of, any_of, check, try_check, BoxedMatcher, Conjunction, Disjunction, LeafMismatch,
    Matcher, MatcherError, MatcherExt, Mismatch, Satisfied,
};
use std::collections::HashSet;
use std::sync::Arc;

/// Always passes.
struct Pass;

/// Always fails with the given description.
struct Fail(&'static str);

impl Matcher<()> for Pass {
    fn matches(&self, _env: &()) -> bool {
        true
    }

    fn mismatches(&self, _env: &()) -> Vec<Mismatch> {
        Vec::new()
    }
}

impl Matcher<()> for Fail {
    fn matches(&self, _env: &()) -> bool {
        false
    }

    fn mismatches(&self, _env: &()) -> Vec<Mismatch> {
        vec![Mismatch::leaf(self.0)]
    }
}

fn described(mismatches: &[Mismatch]) -> Vec<String> {
    mismatches.iter().map(Mismatch::describe).collect()
}

#[test]
fn conjunction_reports_only_failing_side() {
    let m = Conjunction::new(Pass, Fail("B failed"));
    assert!(!m.matches(&()));
    assert_eq!(described(&m.mismatches(&())), vec!["B failed"]);
}

#[test]
fn conjunction_reports_both_failures_in_order() {
    let m = Conjunction::new(Fail("B failed"), Fail("C failed"));
    assert!(!m.matches(&()));
    assert_eq!(described(&m.mismatches(&())), vec!["B failed", "C failed"]);
}

#[test]
fn disjunction_with_passing_branch_is_silent() {
    let m = Disjunction::new(Pass, Fail("B failed"));
    assert!(m.matches(&()));
    assert!(m.mismatches(&()).is_empty());
}

#[test]
fn disjunction_explains_both_failures() {
    let m = Disjunction::new(Fail("B failed"), Fail("C failed"));
    assert!(!m.matches(&()));

    let mismatches = m.mismatches(&());
    assert_eq!(mismatches.len(), 1);
    insta::assert_snapshot!(mismatches[0].describe(), @"Failed both B failed and C failed");
}

#[test]
fn satisfied_disjunction_inside_conjunction() {
    let m = Conjunction::new(Disjunction::new(Pass, Fail("B failed")), Fail("C failed"));
    assert!(!m.matches(&()));
    assert_eq!(described(&m.mismatches(&())), vec!["C failed"]);
}

#[test]
fn environment_drives_leaf_results() {
    type Classpath = HashSet<&'static str>;

    let class = |name: &'static str| {
        check(move |cp: &Classpath| {
            (!cp.contains(name)).then(|| {
                LeafMismatch::new(format!("Missing class {}", name))
                    .with_source("HttpAdvice:12")
                    .into()
            })
        })
    };
    let gate = class("okhttp3.Call")
        .or(class("okhttp.Call"))
        .and(class("okio.Buffer"));

    let modern = Classpath::from(["okhttp3.Call", "okio.Buffer"]);
    assert!(gate.matches(&modern));
    assert!(gate.mismatches(&modern).is_empty());

    let empty = Classpath::new();
    assert!(!gate.matches(&empty));
    insta::assert_snapshot!(
        compat_matcher::join(&gate.mismatches(&empty), "; "),
        @"Failed both HttpAdvice:12 Missing class okhttp3.Call and HttpAdvice:12 Missing class okhttp.Call; HttpAdvice:12 Missing class okio.Buffer"
    );
}

#[test]
fn folded_lists_evaluate_like_nested_trees() {
    let all: BoxedMatcher<()> = all_of(vec![
        Pass.boxed(),
        Fail("B failed").boxed(),
        Fail("C failed").boxed(),
    ]);
    assert_eq!(described(&all.mismatches(&())), vec!["B failed", "C failed"]);

    let any = any_of(vec![Fail("B failed").boxed(), Fail("C failed").boxed()]).unwrap();
    assert_eq!(
        described(&any.mismatches(&())),
        vec!["Failed both B failed and C failed"]
    );

    assert!(matches!(
        any_of::<(), _>(std::iter::empty()),
        Err(MatcherError::NoAlternatives)
    ));
    assert!(all_of::<(), _>(std::iter::empty()).matches(&()));
}

#[test]
fn faulting_leaf_fails_without_propagating() {
    let manifest = try_check("jar-manifest", |_: &()| anyhow::bail!("zip header corrupt"));
    let m = Disjunction::new(manifest, Satisfied);
    assert!(m.matches(&()));

    let manifest = try_check("jar-manifest", |_: &()| anyhow::bail!("zip header corrupt"));
    let m = Conjunction::new(Pass, manifest);
    assert!(!m.matches(&()));
    assert_eq!(
        described(&m.mismatches(&())),
        vec!["jar-manifest evaluation failed: zip header corrupt"]
    );
}

#[test]
fn shared_tree_evaluates_concurrently() {
    let tree: Arc<BoxedMatcher<u32>> = Arc::new(
        check(|n: &u32| (n % 2 != 0).then(|| Mismatch::leaf(format!("{} is odd", n))))
            .or(check(|n: &u32| (*n < 10).then(|| Mismatch::leaf(format!("{} is small", n)))))
            .boxed(),
    );

    std::thread::scope(|scope| {
        for n in 0..16u32 {
            let tree = Arc::clone(&tree);
            scope.spawn(move || {
                let expected = n % 2 == 0 || n >= 10;
                assert_eq!(tree.matches(&n), expected);
                assert_eq!(tree.mismatches(&n).is_empty(), expected);
            });
        }
    });
}

#[test]
fn mismatches_serialize_for_reporters() {
    let m = Disjunction::new(Fail("B failed"), Fail("C failed"));
    let json = serde_json::to_string(&m.mismatches(&())).unwrap();
    assert_eq!(
        json,
        r#"[{"kind":"disjunction","first":[{"kind":"leaf","sources":[],"details":"B failed"}],"second":[{"kind":"leaf","sources":[],"details":"C failed"}]}]"#
    );
}
