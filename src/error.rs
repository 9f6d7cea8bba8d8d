//! Error types for relnotes modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading and validating the JSON configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to open {path}, please ensure that it exists: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error in {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Key '{key}' doesn't contain a correct value: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Errors from validating command-line input against the configured syntax.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("No release notes source was given")]
    NoReleaseNotesSource,

    #[error("Unknown release notes source '{0}'")]
    IncorrectReleaseNotesSource(String),

    #[error("No release notes mode was given")]
    NoReleaseNotesMode,

    #[error("Unknown release notes mode '{0}'")]
    IncorrectReleaseNotesMode(String),

    #[error("No release start reference was given")]
    NoReleaseStartReference,

    #[error("No release end reference was given")]
    NoReleaseEndReference,

    #[error("No pull request number was given")]
    NoPullRequestNumber,

    #[error("No GitHub token was given")]
    NoGithubToken,

    #[error("No GitHub repository was given and none could be detected")]
    NoGithubRepository,
}

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to find reference '{0}': {1}")]
    ReferenceNotFound(String, #[source] git2::Error),

    #[error("Failed to parse commit: {0}")]
    ParseCommit(#[source] git2::Error),

    #[error("Failed to walk commit history: {0}")]
    RevwalkError(#[source] git2::Error),
}

/// Errors from GitHub API operations.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error(
        "GitHub authentication failed: no valid auth found. Run 'gh auth login' or set GITHUB_TOKEN environment variable"
    )]
    AuthenticationFailed,

    #[error("Rate limited by GitHub API: {message}")]
    RateLimited { message: String },

    #[error("Unauthorized access to the GitHub API: {message}")]
    Unauthorized { message: String },

    #[error("Bad request to the GitHub API: {message}")]
    BadRequest { message: String },

    #[error(
        "{resource} not found, or the token used doesn't have permission to access it: {message}"
    )]
    NotFound { resource: String, message: String },

    #[error("GitHub API could not process the request for {resource} (status {status}): {message}")]
    ServerError {
        resource: String,
        status: u16,
        message: String,
    },

    #[error("GitHub API returned unexpected status {status} for {resource}: {message}")]
    UnexpectedStatus {
        resource: String,
        status: u16,
        message: String,
    },

    #[error("Unable to make request to the GitHub API: {0}")]
    Transport(#[source] Box<octocrab::Error>),

    #[error("Failed to parse repository '{0}', expected OWNER/REPO")]
    InvalidRepository(String),
}

/// Errors from assembling release notes.
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Failed to read '{commit_type}' commits: {source}")]
    CommitSource {
        commit_type: String,
        #[source]
        source: GitError,
    },

    #[error("Failed to fetch pull request #{number} for '{commit_type}' notes: {source}")]
    PullRequest {
        commit_type: String,
        number: u64,
        #[source]
        source: GitHubError,
    },

    #[error("Failed to convert release notes to HTML: {0}")]
    HtmlConversion(#[source] GitHubError),

    #[error("No release notes were generated: no commit matched any configured type")]
    EmptyReleaseNotes,
}

/// Errors from writing the finished documents.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write markdown release notes to {path}: {source}")]
    MarkdownFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write HTML release notes to {path}: {source}")]
    HtmlFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any failure of a complete generation run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    GitHub(#[from] GitHubError),

    #[error(transparent)]
    Notes(#[from] NotesError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
