//! Report-side orchestration over the search gateway.
//!
//! Runs the report categories for a window and roster, one query at a
//! time, and hands the ordered results to the (out-of-scope) report
//! renderer. Results are unioned per category without de-duplication:
//! an issue matched by two members' queries appears under both.

use crate::github::{DateRange, IssueSearchGateway, QueryBuilder, SearchOutcome};
use crate::team::TeamIndex;

/// Per-member activity within the report window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberActivity {
    /// GitHub handle the queries were parameterized with.
    pub handle: String,
    /// Pull requests mentioning the member, authored by others.
    pub mentioned: SearchOutcome,
    /// Open pull requests the member reviewed for others.
    pub reviews: SearchOutcome,
}

/// All category results for one report window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityReport {
    /// Issues created in the window.
    pub created_issues: SearchOutcome,
    /// Pull requests created in the window.
    pub created_pull_requests: SearchOutcome,
    /// Activity of the primary team's members, in roster order.
    pub members: Vec<MemberActivity>,
}

/// Aggregates category activity using a search gateway.
pub struct ActivityReporter<'client, Gateway>
where
    Gateway: IssueSearchGateway,
{
    client: &'client Gateway,
    builder: QueryBuilder,
}

impl<'client, Gateway> ActivityReporter<'client, Gateway>
where
    Gateway: IssueSearchGateway,
{
    /// Creates a reporter over the provided gateway and query builder.
    #[must_use]
    pub const fn new(client: &'client Gateway, builder: QueryBuilder) -> Self {
        Self { client, builder }
    }

    /// Runs every category for the window, sequentially.
    ///
    /// One query runs to completion before the next starts; per-member
    /// queries follow roster order. A category that ends in an error keeps
    /// its partial results in the outcome, and the caller decides whether
    /// that skips the category or aborts the report.
    pub async fn collect(&self, index: &TeamIndex, range: &DateRange) -> ActivityReport {
        let created_issues = self.client.search(&self.builder.created_issues(range)).await;
        let created_pull_requests = self
            .client
            .search(&self.builder.created_pull_requests(range))
            .await;

        let mut members = Vec::new();
        for handle in index.primary_handles() {
            let mentioned = self
                .client
                .search(&self.builder.mentioned_pull_requests(handle, range))
                .await;
            let reviews = self
                .client
                .search(&self.builder.review_pull_requests(handle, range))
                .await;
            members.push(MemberActivity {
                handle: handle.clone(),
                mentioned,
                reviews,
            });
        }

        ActivityReport {
            created_issues,
            created_pull_requests,
            members,
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::always;

    use super::ActivityReporter;
    use crate::config::{Member, Team};
    use crate::github::{
        DateRange, Issue, MockIssueSearchGateway, QueryBuilder, SearchOutcome,
    };
    use crate::team::TeamIndex;

    fn issue(url: &str) -> Issue {
        Issue {
            number: 1,
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

    fn roster() -> Vec<Team> {
        vec![Team {
            name: "Infra".to_owned(),
            members: vec![
                Member {
                    name: "Jane Doe".to_owned(),
                    github: "janedoe".to_owned(),
                    email: "jane@example.com".to_owned(),
                },
                Member {
                    name: "Sam Lee".to_owned(),
                    github: "samlee".to_owned(),
                    email: "sam@example.com".to_owned(),
                },
            ],
        }]
    }

    #[tokio::test]
    async fn collect_runs_two_queries_per_member_plus_two_global_ones() {
        let mut gateway = MockIssueSearchGateway::new();
        gateway
            .expect_search()
            .with(always())
            .times(6)
            .returning(|query| SearchOutcome {
                issues: vec![issue(query.query())],
                error: None,
            });

        let index = TeamIndex::from_roster(&roster(), "Infra");
        let builder = QueryBuilder::new(&["org/repo1".to_owned()]);
        let reporter = ActivityReporter::new(&gateway, builder);
        let range = DateRange::new("2024-01-01T00:00:00Z", None);

        let report = reporter.collect(&index, &range).await;

        assert_eq!(report.members.len(), 2);
        assert_eq!(
            report
                .members
                .iter()
                .map(|member| member.handle.as_str())
                .collect::<Vec<_>>(),
            ["janedoe", "samlee"],
            "members should follow roster order"
        );
        let mentioned = &report.members[0].mentioned;
        assert!(
            mentioned.issues[0].html_url.contains("mentions:janedoe"),
            "mentioned query should be parameterized by handle"
        );
        assert!(
            report.created_issues.issues[0]
                .html_url
                .contains("is:issue"),
        );
    }

    #[tokio::test]
    async fn collect_with_an_empty_primary_team_runs_only_global_queries() {
        let mut gateway = MockIssueSearchGateway::new();
        gateway
            .expect_search()
            .with(always())
            .times(2)
            .returning(|_| SearchOutcome::default());

        let index = TeamIndex::from_roster(&roster(), "Nonexistent");
        let builder = QueryBuilder::new(&["org/repo1".to_owned()]);
        let reporter = ActivityReporter::new(&gateway, builder);
        let range = DateRange::new("2024-01-01T00:00:00Z", None);

        let report = reporter.collect(&index, &range).await;
        assert!(report.members.is_empty());
    }
}
