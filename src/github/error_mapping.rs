//! Error classification helpers for the search gateway.

use http::StatusCode;

use super::error::SearchError;
use super::query::SearchQuery;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
pub(super) fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

/// Checks whether GitHub rejected the query itself.
///
/// The search endpoint answers 422 for malformed dates, unknown qualifiers,
/// and nonexistent users referenced by `author:`-style filters.
pub(super) const fn is_query_rejected(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNPROCESSABLE_ENTITY)
}

/// Maps a non-rate-limit octocrab failure into a [`SearchError`] tagged with
/// the originating query and page.
pub(super) fn map_search_error(
    query: &SearchQuery,
    page: u32,
    error: &octocrab::Error,
) -> SearchError {
    if let octocrab::Error::GitHub { source, .. } = error {
        if is_query_rejected(source.status_code) {
            return SearchError::QueryRejected {
                query: query.query().to_owned(),
                message: source.message.clone(),
            };
        }
        return if is_auth_failure(source.status_code) {
            SearchError::Authentication {
                query: query.query().to_owned(),
                page,
                message: format!(
                    "GitHub returned {status} {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        } else {
            SearchError::Api {
                query: query.query().to_owned(),
                page,
                message: format!(
                    "search failed with status {status}: {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        };
    }

    if is_network_error(error) {
        return SearchError::Network {
            query: query.query().to_owned(),
            page,
            message: format!("search failed: {error}"),
        };
    }

    SearchError::Api {
        query: query.query().to_owned(),
        page,
        message: format!("search failed: {error}"),
    }
}
