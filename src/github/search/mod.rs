//! Paginated execution of search queries with rate-limit retry.
//!
//! The gateway walks the search endpoint page by page until the response
//! carries no `rel="next"` link, accumulating issues along the way. A
//! rate-limited page is retried in place with a backoff sized from the
//! server-reported reset time; any other failure ends the walk and is
//! surfaced alongside whatever was already fetched.

use std::time::Duration;

use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use url::Url;

use super::client::{PersonalAccessToken, build_github_client};
use super::collector;
use super::error::SearchError;
use super::error_mapping::{is_rate_limit_error, map_search_error};
use super::models::{ApiIssue, Issue};
use super::query::SearchQuery;
use super::rate_limit::RateLimitInfo;

/// Path of the issue search endpoint, relative to the API base.
const SEARCH_PATH: &str = "/search/issues";

/// Results requested per page; the search API caps pages at 100.
const PER_PAGE: &str = "100";

/// Bounds on rate-limit retries within a single search call.
///
/// The floor guards against a reset time that has already elapsed or is
/// reported in the past: clock skew or stale rate-limit metadata would
/// otherwise shrink the wait to zero and hammer an already-exhausted quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum retries for a persistently rate-limited page.
    pub max_attempts: u32,
    /// Lower bound on the backoff wait.
    pub backoff_floor: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            backoff_floor: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Backoff for a reset that is `seconds_until_reset` away, clamped to
    /// the floor.
    #[must_use]
    pub fn backoff_from(&self, seconds_until_reset: u64) -> Duration {
        Duration::from_secs(seconds_until_reset).max(self.backoff_floor)
    }

    /// Backoff derived from the reported rate limit state, falling back to
    /// the floor when no reset time is known.
    fn backoff(&self, rate_limit: Option<&RateLimitInfo>) -> Duration {
        self.backoff_from(rate_limit.map_or(0, RateLimitInfo::seconds_until_reset))
    }
}

/// Outcome of executing one search query across all of its pages.
///
/// Issues accumulated before a terminal failure are kept, so the caller can
/// decide whether a failed category query aborts the whole report or is
/// skipped with partial data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// All fetched issues, sorted ascending by HTML URL.
    pub issues: Vec<Issue>,
    /// The error that ended pagination early, if any.
    pub error: Option<SearchError>,
}

impl SearchOutcome {
    /// Returns true when every page was fetched successfully.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Gateway that can execute issue search queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueSearchGateway: Send + Sync {
    /// Executes the query across all pages, returning ordered issues plus
    /// any terminal error.
    async fn search(&self, query: &SearchQuery) -> SearchOutcome;
}

/// Octocrab-backed search gateway.
pub struct OctocrabSearchGateway {
    client: Octocrab,
    retry: RetryPolicy,
}

impl OctocrabSearchGateway {
    /// Creates a gateway with the default retry policy.
    #[must_use]
    pub fn new(client: Octocrab) -> Self {
        Self::with_retry_policy(client, RetryPolicy::default())
    }

    /// Creates a gateway with an explicit retry policy.
    #[must_use]
    pub const fn with_retry_policy(client: Octocrab, retry: RetryPolicy) -> Self {
        Self { client, retry }
    }

    /// Builds a gateway for the given token and API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the Octocrab client cannot be built.
    pub fn for_token(token: &PersonalAccessToken, api_base: &str) -> Result<Self, SearchError> {
        let client = build_github_client(token, api_base)?;
        Ok(Self::new(client))
    }

    /// Walks all pages of the query.
    ///
    /// Pages are fetched in increasing page-number order with one request in
    /// flight at a time; the backoff sleep is the only suspension point. The
    /// retry budget is scoped to the whole call and is not replenished
    /// between pages.
    async fn run_search(&self, query: &SearchQuery) -> SearchOutcome {
        let mut page: u32 = 1;
        let mut retries: u32 = 0;
        let mut issues: Vec<Issue> = Vec::new();

        loop {
            let fetched = match self.fetch_page(query, page).await {
                Ok(fetched) => fetched,
                Err(error) => {
                    if rate_limited(&error) && retries < self.retry.max_attempts {
                        retries += 1;
                        self.back_off(query, page, retries).await;
                        continue;
                    }
                    let surfaced = self.map_error_with_rate_limit(query, page, &error).await;
                    tracing::warn!("search aborted: {surfaced}");
                    collector::sort_by_url(&mut issues);
                    return SearchOutcome {
                        issues,
                        error: Some(surfaced),
                    };
                }
            };

            issues.extend(fetched.items.into_iter().map(Issue::from));

            let next_url = fetched
                .next
                .as_ref()
                .and_then(|uri| Url::parse(&uri.to_string()).ok());
            match next_page_number(next_url.as_ref()) {
                Some(next) => page = next,
                None => break,
            }
        }

        collector::sort_by_url(&mut issues);
        SearchOutcome {
            issues,
            error: None,
        }
    }

    async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: u32,
    ) -> Result<Page<ApiIssue>, octocrab::Error> {
        let page_value = page.to_string();
        let params = [
            ("q", query.query()),
            ("sort", query.sort().as_str()),
            ("per_page", PER_PAGE),
            ("page", page_value.as_str()),
        ];
        tracing::debug!("fetching page {page} of query {q:?}", q = query.query());
        self.client.get(SEARCH_PATH, Some(&params)).await
    }

    /// Sleeps until the reported quota reset, never less than the policy
    /// floor.
    async fn back_off(&self, query: &SearchQuery, page: u32, attempt: u32) {
        let rate_limit = self.fetch_rate_limit_info().await;
        let backoff = self.retry.backoff(rate_limit.as_ref());
        tracing::warn!(
            "rate limited on page {page} of query {q:?}, waiting {seconds}s (retry {attempt}/{max})",
            q = query.query(),
            seconds = backoff.as_secs(),
            max = self.retry.max_attempts
        );
        tokio::time::sleep(backoff).await;
    }

    /// Maps an Octocrab error to a [`SearchError`], with special handling
    /// for rate limit errors whose retry budget is spent.
    async fn map_error_with_rate_limit(
        &self,
        query: &SearchQuery,
        page: u32,
        error: &octocrab::Error,
    ) -> SearchError {
        match error {
            octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source) => {
                let rate_limit = self.fetch_rate_limit_info().await;
                SearchError::RateLimitExceeded {
                    query: query.query().to_owned(),
                    page,
                    rate_limit,
                    message: format!(
                        "retry budget exhausted: {message}",
                        message = source.message
                    ),
                }
            }
            _ => map_search_error(query, page, error),
        }
    }

    /// Fetches rate limit information from the dedicated endpoint.
    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        let Ok(limit) = u32::try_from(rate.limit) else {
            return None;
        };
        let Ok(remaining) = u32::try_from(rate.remaining) else {
            return None;
        };
        Some(RateLimitInfo::new(limit, remaining, rate.reset))
    }
}

#[async_trait]
impl IssueSearchGateway for OctocrabSearchGateway {
    async fn search(&self, query: &SearchQuery) -> SearchOutcome {
        self.run_search(query).await
    }
}

/// True when the error is a rate-limit rejection.
fn rate_limited(error: &octocrab::Error) -> bool {
    matches!(error, octocrab::Error::GitHub { source, .. } if is_rate_limit_error(source))
}

/// Extracts the next page number from the `rel="next"` link.
///
/// Absence of the link (or of its `page` parameter) is the end-of-results
/// sentinel.
fn next_page_number(next: Option<&Url>) -> Option<u32> {
    next.and_then(|url| {
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok())
    })
}
