//! Error types exposed by the search layer.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Errors surfaced while composing queries or communicating with GitHub.
///
/// Variants raised during a search carry the originating query string and the
/// page number that was in flight so the caller can log precise context when
/// deciding whether to skip a category or abort the whole report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// The API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidUrl(String),

    /// Configuration could not be loaded or the client could not be built.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token while searching {query:?}: {message}")]
    Authentication {
        /// The search query that was being executed.
        query: String,
        /// Page number in flight when the rejection occurred.
        page: u32,
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub rejected the query itself (HTTP 422), e.g. a malformed date
    /// expression or an unknown qualifier. Never retried.
    #[error("GitHub rejected query {query:?}: {message}")]
    QueryRejected {
        /// The rejected search query.
        query: String,
        /// Validation message from GitHub.
        message: String,
    },

    /// The search rate limit stayed exhausted through the whole retry budget.
    #[error("rate limit exceeded on page {page} of query {query:?}: {message}")]
    RateLimitExceeded {
        /// The search query that was being executed.
        query: String,
        /// Page that could not be fetched within the retry budget.
        page: u32,
        /// Rate limit info if available from the rate-limit endpoint.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error on page {page} of query {query:?}: {message}")]
    Network {
        /// The search query that was being executed.
        query: String,
        /// Page number in flight when the transport failed.
        page: u32,
        /// Transport-level error detail.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error on page {page} of query {query:?}: {message}")]
    Api {
        /// The search query that was being executed.
        query: String,
        /// Page number in flight when the error was returned.
        page: u32,
        /// Response body from GitHub describing the failure.
        message: String,
    },
}
