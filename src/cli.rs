//! Command-line arguments and their validation against the configured input names.

use std::path::PathBuf;

use clap::Parser;
use git2::Repository;

use crate::config::{DEFAULT_CONFIG_FILE, InputNames};
use crate::error::{InputError, RunError};
use crate::github::GitHubRepo;
use crate::notes::{ReleaseNoteSource, RenderMode};

/// Generate markdown and HTML release notes from conventional commits.
#[derive(Parser, Debug)]
#[command(name = "relnotes")]
#[command(about = "Generate markdown and HTML release notes from conventional commits and pull requests")]
#[command(version)]
pub struct Cli {
    /// Where notes come from: commit messages, pull requests, or a single pull request
    pub source: Option<String>,

    /// Start of the release, excluded from it (tag, commit hash, or branch)
    #[arg(long)]
    pub from: Option<String>,

    /// End of the release (tag, commit hash, or branch)
    #[arg(long, default_value = "HEAD")]
    pub to: String,

    /// Render mode for the pull request source (short or full)
    #[arg(long)]
    pub mode: Option<String>,

    /// Pull request number for the single pull request source
    #[arg(long)]
    pub pr: Option<u64>,

    /// GitHub token (falls back to gh CLI, GITHUB_TOKEN, then GH_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// GitHub repository as OWNER/REPO (defaults to the origin remote)
    #[arg(long)]
    pub repository: Option<String>,

    /// Path to the JSON configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory the markdown and HTML files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

/// The `from..to` references a release spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefRange {
    pub from: String,
    pub to: String,
}

/// A validated generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub source: ReleaseNoteSource,
    pub mode: RenderMode,
    /// Absent for the single pull request source, which reads no history.
    pub range: Option<RefRange>,
}

/// Validate the arguments in `cli` against the accepted spellings in `names`.
pub fn resolve_request(cli: &Cli, names: &InputNames) -> Result<RunRequest, InputError> {
    let source = resolve_source(cli.source.as_deref(), cli.pr, names)?;

    let range = match source {
        ReleaseNoteSource::SinglePullRequest(_) => None,
        _ => Some(resolve_range(cli.from.as_deref(), &cli.to)?),
    };

    let mode = match source {
        ReleaseNoteSource::CommitMessages => RenderMode::Short,
        ReleaseNoteSource::PullRequests => resolve_mode(cli.mode.as_deref(), names)?,
        ReleaseNoteSource::SinglePullRequest(_) => RenderMode::Full,
    };

    Ok(RunRequest {
        source,
        mode,
        range,
    })
}

/// Match the source argument against its CLI and GitHub Actions spellings.
pub fn resolve_source(
    arg: Option<&str>,
    pr: Option<u64>,
    names: &InputNames,
) -> Result<ReleaseNoteSource, InputError> {
    let arg = non_blank(arg).ok_or(InputError::NoReleaseNotesSource)?;

    if arg == names.commit_messages_source_cli_input_name
        || arg == names.commit_messages_source_github_actions_input_name
    {
        Ok(ReleaseNoteSource::CommitMessages)
    } else if arg == names.pull_requests_source_cli_input_name
        || arg == names.pull_requests_source_github_actions_input_name
    {
        Ok(ReleaseNoteSource::PullRequests)
    } else if arg == names.single_pull_request_source_cli_input_name {
        pr.map(ReleaseNoteSource::SinglePullRequest)
            .ok_or(InputError::NoPullRequestNumber)
    } else {
        Err(InputError::IncorrectReleaseNotesSource(arg.to_string()))
    }
}

/// Match the mode argument against its CLI and GitHub Actions spellings.
pub fn resolve_mode(arg: Option<&str>, names: &InputNames) -> Result<RenderMode, InputError> {
    let arg = non_blank(arg).ok_or(InputError::NoReleaseNotesMode)?;

    if arg == names.full_mode_cli_input_name || arg == names.full_mode_github_actions_input_name {
        Ok(RenderMode::Full)
    } else if arg == names.short_mode_cli_input_name
        || arg == names.short_mode_github_actions_input_name
    {
        Ok(RenderMode::Short)
    } else {
        Err(InputError::IncorrectReleaseNotesMode(arg.to_string()))
    }
}

fn resolve_range(from: Option<&str>, to: &str) -> Result<RefRange, InputError> {
    let from = non_blank(from).ok_or(InputError::NoReleaseStartReference)?;
    let to = non_blank(Some(to)).ok_or(InputError::NoReleaseEndReference)?;

    Ok(RefRange {
        from: from.to_string(),
        to: to.to_string(),
    })
}

/// Pick the repository notes link to: the explicit argument, else `origin`.
///
/// A malformed explicit argument is a GitHub error; a missing or non-GitHub
/// origin is reported as missing input.
pub fn resolve_repository(
    explicit: Option<&str>,
    checkout: Option<&Repository>,
) -> Result<GitHubRepo, RunError> {
    if let Some(slug) = non_blank(explicit) {
        return Ok(GitHubRepo::parse(slug)?);
    }

    checkout
        .and_then(|repo| GitHubRepo::from_origin(repo).ok())
        .ok_or(RunError::Input(InputError::NoGithubRepository))
}

fn non_blank(arg: Option<&str>) -> Option<&str> {
    arg.map(str::trim).filter(|a| !a.is_empty())
}
