//! Data models for issues returned by the search endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An issue or pull request returned by the search endpoint.
///
/// The search layer only depends on [`html_url`](Self::html_url) as the
/// ordering key; the remaining fields are passed through untouched for the
/// report generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Issue or pull request number within its repository.
    pub number: u64,
    /// Title as returned by the API.
    pub title: Option<String>,
    /// State (e.g. open, closed).
    pub state: Option<String>,
    /// Canonical HTML URL; unique per issue and used as the sort key.
    pub html_url: String,
    /// Author login if present.
    pub author: Option<String>,
    /// Label names attached to the issue.
    pub labels: Vec<String>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
    /// True when the search item is a pull request.
    pub is_pull_request: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiIssue {
    pub(super) number: u64,
    pub(super) title: Option<String>,
    pub(super) state: Option<String>,
    pub(super) html_url: Option<String>,
    pub(super) user: Option<ApiUser>,
    #[serde(default)]
    pub(super) labels: Vec<ApiLabel>,
    pub(super) created_at: Option<DateTime<Utc>>,
    pub(super) updated_at: Option<DateTime<Utc>>,
    // Present (possibly as an object of URLs) only when the item is a PR.
    pub(super) pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiLabel {
    pub(super) name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiUser {
    pub(super) login: Option<String>,
}

impl From<ApiIssue> for Issue {
    fn from(value: ApiIssue) -> Self {
        Self {
            number: value.number,
            title: value.title,
            state: value.state,
            html_url: value.html_url.unwrap_or_default(),
            author: value.user.and_then(|user| user.login),
            labels: value
                .labels
                .into_iter()
                .filter_map(|label| label.name)
                .collect(),
            created_at: value.created_at,
            updated_at: value.updated_at,
            is_pull_request: value.pull_request.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiIssue, Issue};

    #[test]
    fn api_issue_converts_labels_and_pull_request_marker() {
        let api: ApiIssue = serde_json::from_value(serde_json::json!({
            "number": 42,
            "title": "Speed up planner",
            "state": "open",
            "html_url": "https://github.com/org/repo/pull/42",
            "user": { "login": "octocat" },
            "labels": [{ "name": "perf" }, { "name": null }],
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z",
            "pull_request": { "url": "https://api.github.com/repos/org/repo/pulls/42" }
        }))
        .expect("fixture should deserialize");

        let issue = Issue::from(api);
        assert_eq!(issue.number, 42);
        assert_eq!(issue.labels, vec!["perf".to_owned()]);
        assert!(issue.is_pull_request);
        assert_eq!(issue.author.as_deref(), Some("octocat"));
    }

    #[test]
    fn plain_issue_is_not_marked_as_pull_request() {
        let api: ApiIssue = serde_json::from_value(serde_json::json!({
            "number": 7,
            "html_url": "https://github.com/org/repo/issues/7"
        }))
        .expect("fixture should deserialize");

        let issue = Issue::from(api);
        assert!(!issue.is_pull_request);
        assert!(issue.labels.is_empty());
    }
}
