//! Standup library crate aggregating team activity from GitHub.
//!
//! The library composes filtered search queries (by author, mentions,
//! reviewer, date range) scoped to a configured repository set, executes
//! them against the GitHub issue search endpoint with paginated retrieval
//! and rate-limit backoff, and returns merged, URL-ordered result sets for
//! a downstream status-report generator.

pub mod config;
pub mod github;
pub mod report;
pub mod team;

pub use config::{Member, Roster, StandupConfig, Team};
pub use github::{
    DateRange, Issue, IssueSearchGateway, OctocrabSearchGateway, PersonalAccessToken, QueryBuilder,
    SearchError, SearchOutcome,
};
pub use report::{ActivityReport, ActivityReporter, MemberActivity};
pub use team::TeamIndex;
