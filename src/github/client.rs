//! Octocrab client construction for the search gateway.

use http::Uri;
use octocrab::Octocrab;

use super::error::SearchError;

/// A validated GitHub personal access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Wraps a token value, rejecting blank input.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingToken`] when the value is empty or
    /// whitespace-only.
    pub fn new(value: impl Into<String>) -> Result<Self, SearchError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(SearchError::MissingToken);
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds an authenticated Octocrab client against the given API base URL.
///
/// # Errors
///
/// Returns [`SearchError::InvalidUrl`] when the base URI cannot be parsed
/// or [`SearchError::Configuration`] when Octocrab fails to construct a
/// client.
pub(super) fn build_github_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, SearchError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| SearchError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| SearchError::Configuration {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| SearchError::Configuration {
            message: format!("build client failed: {error}"),
        })
}
