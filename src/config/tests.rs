//! Tests for configuration and roster loading.

use std::io::Write;
use std::path::Path;

use rstest::rstest;

use super::{Roster, StandupConfig};
use crate::github::SearchError;

#[rstest]
fn resolve_token_prefers_configured_value() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = StandupConfig {
        token: Some("configured-token".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_token().expect("token should resolve"),
        "configured-token"
    );
}

#[rstest]
fn resolve_token_falls_back_to_github_token_env() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = StandupConfig::default();

    assert_eq!(
        config.resolve_token().expect("token should resolve"),
        "legacy-token"
    );
}

#[rstest]
fn resolve_token_errors_when_no_source_provides_one() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = StandupConfig::default();

    assert_eq!(config.resolve_token(), Err(SearchError::MissingToken));
}

#[rstest]
fn api_base_defaults_to_github_dot_com() {
    let config = StandupConfig::default();
    assert_eq!(config.api_base(), "https://api.github.com");

    let enterprise = StandupConfig {
        api_base: Some("https://github.example.com/api/v3".to_owned()),
        ..Default::default()
    };
    assert_eq!(enterprise.api_base(), "https://github.example.com/api/v3");
}

#[rstest]
fn report_range_requires_the_lower_bound() {
    let config = StandupConfig::default();
    assert!(matches!(
        config.report_range(),
        Err(SearchError::Configuration { .. })
    ));
}

#[rstest]
fn report_range_renders_open_and_closed_windows() {
    let open = StandupConfig {
        since: Some("2024-01-01T00:00:00Z".to_owned()),
        ..Default::default()
    };
    assert_eq!(
        open.report_range().expect("range should build").render(),
        ">=2024-01-01T00:00:00Z"
    );

    let closed = StandupConfig {
        since: Some("2024-01-01T00:00:00Z".to_owned()),
        until: Some("2024-01-08T00:00:00Z".to_owned()),
        ..Default::default()
    };
    assert_eq!(
        closed.report_range().expect("range should build").render(),
        "2024-01-01T00:00:00Z..2024-01-08T00:00:00Z"
    );
}

#[rstest]
fn roster_document_parses_repos_and_teams() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
    write!(
        file,
        r#"
repos = ["org/repo1", "org/repo2"]

[[teams]]
name = "Infra"

[[teams.members]]
name = "Jane Doe"
github = "janedoe"
email = "jane@example.com"
"#
    )
    .expect("roster fixture should be written");

    let roster = Roster::from_file(file.path()).expect("roster should load");
    assert_eq!(roster.repos, ["org/repo1", "org/repo2"]);
    assert_eq!(roster.teams.len(), 1);
    let team = roster.teams.first().expect("team should be present");
    assert_eq!(team.name, "Infra");
    assert_eq!(
        team.members
            .iter()
            .map(|member| member.github.as_str())
            .collect::<Vec<_>>(),
        ["janedoe"]
    );
}

#[rstest]
fn missing_roster_file_is_a_configuration_error() {
    let result = Roster::from_file(Path::new("/nonexistent/roster.toml"));
    assert!(matches!(
        result,
        Err(SearchError::Configuration { .. })
    ));
}

#[rstest]
fn malformed_roster_is_a_configuration_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
    write!(file, "repos = 42").expect("roster fixture should be written");

    assert!(matches!(
        Roster::from_file(file.path()),
        Err(SearchError::Configuration { .. })
    ));
}
