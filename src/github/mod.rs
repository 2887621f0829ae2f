//! GitHub search-query execution engine.
//!
//! This module composes category queries scoped to a fixed repository set,
//! executes them against the issue search endpoint page by page, retries
//! through rate limits with a time-aware backoff, and returns issue
//! collections in a deterministic URL order. Errors are mapped into
//! variants that carry the originating query and page so callers can log
//! precise context without exposing Octocrab internals.

pub mod client;
pub mod collector;
pub mod date_range;
pub mod error;
mod error_mapping;
pub mod models;
pub mod query;
pub mod rate_limit;
pub mod search;

pub use client::PersonalAccessToken;
pub use collector::sort_by_url;
pub use date_range::DateRange;
pub use error::SearchError;
pub use models::Issue;
pub use query::{QueryBuilder, SearchQuery, SortField};
pub use rate_limit::RateLimitInfo;
pub use search::{IssueSearchGateway, OctocrabSearchGateway, RetryPolicy, SearchOutcome};

#[cfg(test)]
pub use search::MockIssueSearchGateway;
