//! Application configuration loaded from CLI, environment, and files.
//!
//! Scalar settings are merged from command-line arguments, environment
//! variables, and configuration files through ortho-config's layered
//! approach. The repository scope and team roster live in a separate
//! roster document so they can be shared across machines and reviewed
//! like any other team-owned file.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest
//! to highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.standup.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `STANDUP_TOKEN`, or legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--token`/`-t`, `--roster`/`-r`, …
//!
//! # Roster Document
//!
//! The file named by `roster` holds the repository scope and teams:
//!
//! ```toml
//! repos = ["org/repo1", "org/repo2"]
//!
//! [[teams]]
//! name = "Infra"
//!
//! [[teams.members]]
//! name = "Jane Doe"
//! github = "janedoe"
//! email = "jane@example.com"
//! ```

use std::env;
use std::fs;
use std::path::Path;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::{DateRange, SearchError};

/// Default API base for github.com; override for GitHub Enterprise.
const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `STANDUP_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `STANDUP_API_BASE` or `--api-base`: API base URL
/// - `STANDUP_ROSTER` or `--roster`: Path to the roster document
/// - `STANDUP_SINCE` or `--since`: Report window lower bound
/// - `STANDUP_UNTIL` or `--until`: Report window upper bound
/// - `STANDUP_PRIMARY_TEAM` or `--primary-team`: Distinguished team name
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "STANDUP",
    discovery(
        dotfile_name = ".standup.toml",
        config_file_name = "standup.toml",
        app_name = "standup"
    )
)]
pub struct StandupConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `STANDUP_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Base URL of the GitHub API, for GitHub Enterprise deployments.
    ///
    /// Defaults to `https://api.github.com`.
    #[ortho_config()]
    pub api_base: Option<String>,

    /// Path to the roster document naming repositories and teams.
    ///
    /// Can be provided via:
    /// - CLI: `--roster <PATH>` or `-r <PATH>`
    /// - Environment: `STANDUP_ROSTER`
    /// - Config file: `roster = "..."`
    #[ortho_config(cli_short = 'r')]
    pub roster: Option<String>,

    /// Lower bound of the report window, e.g. `2024-01-01T00:00:00Z`.
    ///
    /// Must be a UTC timestamp without a numeric offset; the search API
    /// mishandles `+` in query values.
    #[ortho_config(cli_short = 's')]
    pub since: Option<String>,

    /// Optional upper bound of the report window (inclusive).
    #[ortho_config(cli_short = 'u')]
    pub until: Option<String>,

    /// Name of the team whose members drive the per-member queries.
    #[ortho_config(cli_short = 'p')]
    pub primary_team: Option<String>,
}

impl StandupConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingToken`] when no token source provides
    /// a value.
    pub fn resolve_token(&self) -> Result<String, SearchError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(SearchError::MissingToken)
    }

    /// Returns the API base URL, defaulting to github.com.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Returns the roster document path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Configuration`] when no roster is configured.
    pub fn require_roster_path(&self) -> Result<&str, SearchError> {
        self.roster
            .as_deref()
            .ok_or_else(|| SearchError::Configuration {
                message: "roster document is required (use --roster or -r)".to_owned(),
            })
    }

    /// Builds the report window from the configured bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Configuration`] when the lower bound is
    /// missing.
    pub fn report_range(&self) -> Result<DateRange, SearchError> {
        let since = self
            .since
            .as_deref()
            .ok_or_else(|| SearchError::Configuration {
                message: "report window start is required (use --since or -s)".to_owned(),
            })?;
        Ok(DateRange::new(since, self.until.clone()))
    }

    /// Returns the configured primary team name, if any.
    #[must_use]
    pub fn primary_team(&self) -> Option<&str> {
        self.primary_team.as_deref()
    }
}

/// One tracked contributor: display name, tracker handle, contact address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Member {
    /// Display name used in rendered reports.
    pub name: String,
    /// GitHub login.
    pub github: String,
    /// Contact email address.
    pub email: String,
}

/// An ordered group of members under one team name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    /// Team name; matched against the configured primary team.
    pub name: String,
    /// Members in roster order.
    #[serde(default)]
    pub members: Vec<Member>,
}

/// The roster document: repository scope plus the team roster.
///
/// Loaded once at process start and immutable thereafter; the search core
/// borrows it for query scoping and handle lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Roster {
    /// Repositories every query is scoped to, as `owner/name` slugs.
    #[serde(default)]
    pub repos: Vec<String>,
    /// Teams in declaration order.
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl Roster {
    /// Loads and parses the roster document.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Configuration`] when the file cannot be read
    /// or does not parse as a roster.
    pub fn from_file(path: &Path) -> Result<Self, SearchError> {
        let content = fs::read_to_string(path).map_err(|error| SearchError::Configuration {
            message: format!(
                "failed to read roster {path}: {error}",
                path = path.display()
            ),
        })?;
        toml::from_str(&content).map_err(|error| SearchError::Configuration {
            message: format!(
                "failed to parse roster {path}: {error}",
                path = path.display()
            ),
        })
    }
}

#[cfg(test)]
mod tests;
