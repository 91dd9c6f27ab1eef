//! Domain-specific assertion macros for portfolio harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that make it clear
//! which query invariant was violated.

use portfolio_core::Project;

/// Assert that a result list holds exactly these `project_no`s, in order.
///
/// ```rust
/// assert_project_nos!(results, [3, 1, 2]);
/// ```
#[macro_export]
macro_rules! assert_project_nos {
    ($results:expr, [$($id:expr),* $(,)?]) => {{
        let actual: Vec<i64> = $results.iter().map(|p| p.project_no).collect();
        let expected: Vec<i64> = vec![$($id),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_project_nos! failed: result order differs"
        );
    }};
}

/// Assert that every project in a result list satisfies a predicate.
///
/// ```rust
/// assert_results_all!(results, |p: &Project| p.uses("python"));
/// ```
#[macro_export]
macro_rules! assert_results_all {
    ($results:expr, $pred:expr) => {{
        let pred = $pred;
        let failing: Vec<i64> = $results
            .iter()
            .filter(|p| !pred(**p))
            .map(|p| p.project_no)
            .collect();
        if !failing.is_empty() {
            panic!(
                "assert_results_all! failed: projects {:?} did not satisfy predicate ({} checked).",
                failing,
                $results.len()
            );
        }
    }};
}

/// Assert that a tag list is strictly ascending (sorted, no duplicates).
pub fn assert_strictly_ascending(tags: &[String]) {
    for pair in tags.windows(2) {
        assert!(
            pair[0] < pair[1],
            "tags not strictly ascending: {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Identifiers of a result list, for building expectations.
pub fn ids(results: &[&Project]) -> Vec<i64> {
    results.iter().map(|p| p.project_no).collect()
}
