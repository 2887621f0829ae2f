//! Search query composition for the report categories.
//!
//! A [`QueryBuilder`] owns the repository scope precomputed from the
//! configured repository list and exposes one constructor per report
//! category. Filters are declared in a fixed order per category so the same
//! inputs always produce the same query string; the search API itself is
//! order-insensitive.

use super::date_range::DateRange;

/// Sort key accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Sort matches by creation time.
    Created,
    /// Sort matches by last-update time.
    Updated,
}

impl SortField {
    /// Returns the wire value of the sort key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

/// A composed search query plus the sort key it should be executed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    query: String,
    sort: SortField,
}

impl SearchQuery {
    /// Returns the query string.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the sort key.
    #[must_use]
    pub const fn sort(&self) -> SortField {
        self.sort
    }
}

/// Builds category queries scoped to a fixed set of repositories.
///
/// # Example
///
/// ```
/// use standup::github::{DateRange, QueryBuilder};
///
/// let builder = QueryBuilder::new(&["org/repo1".to_owned()]);
/// let query = builder.created_issues(&DateRange::new("2024-01-01T00:00:00Z", None));
/// assert_eq!(
///     query.query(),
///     "repo:org/repo1 is:issue created:>=2024-01-01T00:00:00Z"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    repo_scope: String,
}

impl QueryBuilder {
    /// Precomputes the `repo:` scope from the configured repository list.
    #[must_use]
    pub fn new(repos: &[String]) -> Self {
        let repo_scope = repos
            .iter()
            .map(|repo| format!("repo:{repo}"))
            .collect::<Vec<_>>()
            .join(" ");
        Self { repo_scope }
    }

    /// Issues created in the range.
    #[must_use]
    pub fn created_issues(&self, range: &DateRange) -> SearchQuery {
        self.compose(
            &[("is", "issue".to_owned()), ("created", range.render())],
            SortField::Created,
        )
    }

    /// Pull requests created in the range.
    #[must_use]
    pub fn created_pull_requests(&self, range: &DateRange) -> SearchQuery {
        self.compose(
            &[("is", "pr".to_owned()), ("created", range.render())],
            SortField::Created,
        )
    }

    /// Pull requests updated in the range that mention the handle without
    /// being authored by it.
    ///
    /// The handle is not validated; an invalid handle is rejected by GitHub
    /// and surfaced as a query error.
    #[must_use]
    pub fn mentioned_pull_requests(&self, handle: &str, range: &DateRange) -> SearchQuery {
        self.compose(
            &[
                ("is", "pr".to_owned()),
                ("mentions", handle.to_owned()),
                ("-author", handle.to_owned()),
                ("updated", range.render()),
            ],
            SortField::Updated,
        )
    }

    /// Open pull requests the handle commented on without authoring,
    /// updated in the range.
    #[must_use]
    pub fn review_pull_requests(&self, handle: &str, range: &DateRange) -> SearchQuery {
        self.compose(
            &[
                ("is", "open".to_owned()),
                ("type", "pr".to_owned()),
                ("commenter", handle.to_owned()),
                ("-author", handle.to_owned()),
                ("updated", range.render()),
            ],
            SortField::Updated,
        )
    }

    /// Joins the repository scope and `field:value` tokens with single
    /// spaces, in declaration order.
    fn compose(&self, filters: &[(&str, String)], sort: SortField) -> SearchQuery {
        let mut query = self.repo_scope.clone();
        for (field, value) in filters {
            if !query.is_empty() {
                query.push(' ');
            }
            query.push_str(field);
            query.push(':');
            query.push_str(value);
        }
        SearchQuery { query, sort }
    }
}
