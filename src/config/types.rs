//! Typed configuration values deserialized from the JSON config file.

use serde::Deserialize;

/// Default GitHub REST API root.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default GitHub web root used to build issue and commit links.
pub const DEFAULT_GITHUB_URL: &str = "https://github.com/";

/// Complete tool configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub markdown_output_file_name: String,
    pub html_output_file_name: String,
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,
    #[serde(default = "default_github_url")]
    pub github_url: String,
    /// Commit types in section order.
    pub commit_types: Vec<CommitTypeSpec>,
    #[serde(flatten)]
    pub input_names: InputNames,
    /// Title prefix for Short mode entries (e.g. `"- "`).
    pub markdown_release_note_prefix: String,
    /// Title prefix for Full mode entries (e.g. `"### "`).
    pub markdown_full_mode_release_note_prefix: String,
    pub output_messages: Messages,
}

fn default_github_api_url() -> String {
    DEFAULT_GITHUB_API_URL.to_string()
}

fn default_github_url() -> String {
    DEFAULT_GITHUB_URL.to_string()
}

/// One conventional commit type and the section title it renders under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitTypeSpec {
    /// Position in the registry. Assigned from array order when loading.
    #[serde(skip)]
    pub index: usize,
    #[serde(rename = "conventionalType")]
    pub conventional_name: String,
    #[serde(rename = "markdownTitle")]
    pub section_title: String,
}

impl CommitTypeSpec {
    pub fn new(index: usize, conventional_name: &str, section_title: &str) -> Self {
        Self {
            index,
            conventional_name: conventional_name.to_string(),
            section_title: section_title.to_string(),
        }
    }
}

/// Accepted spellings of the source and mode arguments.
///
/// Each value has a CLI spelling and a GitHub Actions spelling so the same
/// binary can be driven from a terminal or from a workflow's inputs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputNames {
    pub commit_messages_source_cli_input_name: String,
    pub commit_messages_source_github_actions_input_name: String,
    pub pull_requests_source_cli_input_name: String,
    pub pull_requests_source_github_actions_input_name: String,
    pub single_pull_request_source_cli_input_name: String,
    pub short_mode_cli_input_name: String,
    pub short_mode_github_actions_input_name: String,
    pub full_mode_cli_input_name: String,
    pub full_mode_github_actions_input_name: String,
}

/// User-facing message strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Messages {
    pub no_release_notes_source_error: String,
    pub incorrect_release_notes_source_error: String,
    pub no_release_notes_mode_error: String,
    pub incorrect_release_notes_mode_error: String,
    pub no_github_token_error: String,
    pub no_release_start_reference_error: String,
    pub no_release_end_reference_error: String,
    pub no_pull_request_number_error: String,
    pub no_github_repository_error: String,
    pub expected_syntax_message: String,
    pub github_api_rate_limit_exceeded_error: String,
    pub github_api_unauthorized_access_error: String,
    pub github_api_bad_request_error: String,
    #[serde(default = "default_not_found_error")]
    pub github_api_not_found_error: String,
    #[serde(default = "default_server_error")]
    pub github_api_server_error: String,
    pub github_api_unable_to_make_request_error: String,
    pub git_log_error: String,
    pub generating_release_notes_message: String,
    pub failed_to_generate_release_notes_message: String,
    pub markdown_file_error: String,
    pub html_file_error: String,
    pub empty_release_notes_message: String,
}

fn default_not_found_error() -> String {
    "GitHub API resource not found, check the repository name and the token's permissions".to_string()
}

fn default_server_error() -> String {
    "GitHub API request could not be processed".to_string()
}
