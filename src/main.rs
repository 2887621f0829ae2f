//! Standup CLI entrypoint producing a team activity digest.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use standup::{
    ActivityReport, ActivityReporter, OctocrabSearchGateway, PersonalAccessToken, QueryBuilder,
    Roster, SearchError, SearchOutcome, StandupConfig, TeamIndex,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), SearchError> {
    let config = load_config()?;
    let roster = Roster::from_file(Path::new(config.require_roster_path()?))?;
    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let range = config.report_range()?;

    let gateway = OctocrabSearchGateway::for_token(&token, config.api_base())?;
    let builder = QueryBuilder::new(&roster.repos);
    let index = TeamIndex::from_roster(&roster.teams, config.primary_team().unwrap_or_default());

    let reporter = ActivityReporter::new(&gateway, builder);
    let report = reporter.collect(&index, &range).await;

    write_digest(&report, &index)
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`SearchError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<StandupConfig, SearchError> {
    StandupConfig::load().map_err(|error| SearchError::Configuration {
        message: error.to_string(),
    })
}

fn write_digest(report: &ActivityReport, index: &TeamIndex) -> Result<(), SearchError> {
    let mut stdout = io::stdout().lock();
    write_outcome(&mut stdout, "created issues", &report.created_issues)?;
    write_outcome(
        &mut stdout,
        "created pull requests",
        &report.created_pull_requests,
    )?;
    for member in &report.members {
        let contact = index.email_for(&member.handle).unwrap_or("unknown");
        let mentioned_label = format!(
            "{handle} <{contact}>: mentioned in",
            handle = member.handle
        );
        write_outcome(&mut stdout, &mentioned_label, &member.mentioned)?;
        let reviews_label = format!("{handle} <{contact}>: reviewing", handle = member.handle);
        write_outcome(&mut stdout, &reviews_label, &member.reviews)?;
    }
    Ok(())
}

fn write_outcome(
    out: &mut impl Write,
    label: &str,
    outcome: &SearchOutcome,
) -> Result<(), SearchError> {
    writeln!(out, "{label}: {count}", count = outcome.issues.len()).map_err(io_error)?;
    for issue in &outcome.issues {
        writeln!(out, "  {url}", url = issue.html_url).map_err(io_error)?;
    }
    if let Some(error) = &outcome.error {
        writeln!(out, "  (incomplete: {error})").map_err(io_error)?;
    }
    Ok(())
}

fn io_error(error: io::Error) -> SearchError {
    SearchError::Io {
        message: error.to_string(),
    }
}
