//! Ordering of merged search results.
//!
//! Pages from one query, or results unioned across queries by the caller,
//! are brought into a deterministic order here. Issues are not
//! de-duplicated: when two queries return the same issue, both copies
//! appear.

use std::cmp::Ordering;

use super::models::Issue;

/// Sorts issues ascending by their HTML URL.
///
/// The sort is stable, so the (not expected) case of equal URLs preserves
/// relative input order, and sorting an already-sorted sequence is a no-op.
pub fn sort_by_url(issues: &mut [Issue]) {
    issues.sort_by(compare_by_url);
}

/// Comparator over the issue identifying URL.
fn compare_by_url(a: &Issue, b: &Issue) -> Ordering {
    a.html_url.cmp(&b.html_url)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::sort_by_url;
    use crate::github::models::Issue;

    fn issue(url: &str, number: u64) -> Issue {
        Issue {
            number,
            title: None,
            state: None,
            html_url: url.to_owned(),
            author: None,
            labels: Vec::new(),
            created_at: None,
            updated_at: None,
            is_pull_request: false,
        }
    }

    fn urls(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|issue| issue.html_url.as_str()).collect()
    }

    #[rstest]
    #[case::reversed(&["c", "b", "a"])]
    #[case::interleaved(&["b", "a", "c"])]
    #[case::sorted(&["a", "b", "c"])]
    fn all_permutations_of_a_set_sort_identically(#[case] order: &[&str]) {
        let mut issues: Vec<Issue> = order.iter().map(|url| issue(url, 0)).collect();
        sort_by_url(&mut issues);
        assert_eq!(urls(&issues), vec!["a", "b", "c"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut issues = vec![issue("b", 1), issue("a", 2), issue("c", 3)];
        sort_by_url(&mut issues);
        let once = issues.clone();
        sort_by_url(&mut issues);
        assert_eq!(issues, once);
    }

    #[test]
    fn equal_urls_preserve_input_order() {
        let mut issues = vec![issue("same", 1), issue("same", 2)];
        sort_by_url(&mut issues);
        assert_eq!(
            issues.iter().map(|issue| issue.number).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn duplicates_are_not_removed() {
        let mut issues = vec![issue("a", 1), issue("a", 1), issue("b", 2)];
        sort_by_url(&mut issues);
        assert_eq!(issues.len(), 3);
    }
}
