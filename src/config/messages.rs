//! Mapping from typed errors to the configured user-facing messages.

use crate::error::{GitHubError, InputError, NotesError, OutputError, RunError};

use super::types::Messages;

impl Messages {
    /// Configured message for an input error, without the syntax hint.
    pub fn for_input(&self, error: &InputError) -> &str {
        match error {
            InputError::NoReleaseNotesSource => &self.no_release_notes_source_error,
            InputError::IncorrectReleaseNotesSource(_) => &self.incorrect_release_notes_source_error,
            InputError::NoReleaseNotesMode => &self.no_release_notes_mode_error,
            InputError::IncorrectReleaseNotesMode(_) => &self.incorrect_release_notes_mode_error,
            InputError::NoReleaseStartReference => &self.no_release_start_reference_error,
            InputError::NoReleaseEndReference => &self.no_release_end_reference_error,
            InputError::NoPullRequestNumber => &self.no_pull_request_number_error,
            InputError::NoGithubToken => &self.no_github_token_error,
            InputError::NoGithubRepository => &self.no_github_repository_error,
        }
    }

    /// Configured message for a GitHub API failure category.
    pub fn for_github(&self, error: &GitHubError) -> &str {
        match error {
            GitHubError::RateLimited { .. } => &self.github_api_rate_limit_exceeded_error,
            GitHubError::Unauthorized { .. } | GitHubError::AuthenticationFailed => {
                &self.github_api_unauthorized_access_error
            }
            GitHubError::BadRequest { .. } => &self.github_api_bad_request_error,
            GitHubError::NotFound { .. } => &self.github_api_not_found_error,
            GitHubError::ServerError { .. } | GitHubError::UnexpectedStatus { .. } => {
                &self.github_api_server_error
            }
            GitHubError::Transport(_) => &self.github_api_unable_to_make_request_error,
            GitHubError::InvalidRepository(_) => &self.no_github_repository_error,
        }
    }

    /// Everything printed to stderr for a failed run.
    ///
    /// Input errors skip the generic failure line, since generation never started.
    pub fn report(&self, error: &RunError) -> String {
        match error {
            RunError::Input(_) => self.describe(error),
            _ => format!(
                "{}\n{}",
                self.failed_to_generate_release_notes_message,
                self.describe(error)
            ),
        }
    }

    /// Render a run failure as the text shown to the user.
    ///
    /// Input errors are followed by the expected syntax. Every other category
    /// prints its configured message and then the underlying error on its own line.
    pub fn describe(&self, error: &RunError) -> String {
        match error {
            RunError::Input(e) => {
                format!("{}\n{}", self.for_input(e), self.expected_syntax_message)
            }
            RunError::Git(e) => format!("{}\n{}", self.git_log_error, e),
            RunError::GitHub(e) => format!("{}\n{}", self.for_github(e), e),
            RunError::Notes(e) => match e {
                NotesError::EmptyReleaseNotes => self.empty_release_notes_message.clone(),
                NotesError::CommitSource { .. } => format!("{}\n{}", self.git_log_error, e),
                NotesError::PullRequest { source, .. } | NotesError::HtmlConversion(source) => {
                    format!("{}\n{}", self.for_github(source), e)
                }
            },
            RunError::Output(e) => {
                let message = match e {
                    OutputError::MarkdownFile { .. } => &self.markdown_file_error,
                    OutputError::HtmlFile { .. } => &self.html_file_error,
                };
                format!("{}\n{}", message, e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::load_config_str;

    use super::*;

    fn messages() -> Messages {
        load_config_str(include_str!("../../release_notes_config.json"))
            .expect("sample config should load")
            .output_messages
    }

    #[test]
    fn test_input_error_includes_expected_syntax() {
        let messages = messages();
        let text = messages.describe(&RunError::Input(InputError::NoReleaseStartReference));

        assert!(text.starts_with(&messages.no_release_start_reference_error));
        assert!(text.ends_with(&messages.expected_syntax_message));
    }

    #[test]
    fn test_report_prefixes_failure_line_except_for_input() {
        let messages = messages();

        let input = messages.report(&RunError::Input(InputError::NoGithubToken));
        assert!(input.starts_with(&messages.no_github_token_error));

        let empty = messages.report(&RunError::Notes(NotesError::EmptyReleaseNotes));
        assert_eq!(
            empty,
            format!(
                "{}\n{}",
                messages.failed_to_generate_release_notes_message,
                messages.empty_release_notes_message
            )
        );
    }

    #[test]
    fn test_empty_release_notes_uses_configured_message() {
        let messages = messages();
        let text = messages.describe(&RunError::Notes(NotesError::EmptyReleaseNotes));

        assert_eq!(text, messages.empty_release_notes_message);
    }

    #[test]
    fn test_pull_request_failure_uses_github_category() {
        let messages = messages();
        let error = RunError::Notes(NotesError::PullRequest {
            commit_type: "fix".to_string(),
            number: 42,
            source: GitHubError::RateLimited {
                message: "API rate limit exceeded".to_string(),
            },
        });

        let text = messages.describe(&error);
        assert!(text.starts_with(&messages.github_api_rate_limit_exceeded_error));
        assert!(text.contains("#42"));
        assert!(text.contains("'fix'"));
    }

    #[test]
    fn test_each_github_category_has_distinct_message() {
        let messages = messages();
        let categories = [
            GitHubError::RateLimited { message: String::new() },
            GitHubError::Unauthorized { message: String::new() },
            GitHubError::BadRequest { message: String::new() },
            GitHubError::NotFound {
                resource: String::new(),
                message: String::new(),
            },
            GitHubError::ServerError {
                resource: String::new(),
                status: 500,
                message: String::new(),
            },
        ];

        let texts: Vec<&str> = categories.iter().map(|e| messages.for_github(e)).collect();
        for (i, a) in texts.iter().enumerate() {
            for b in &texts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_output_errors_name_the_file_kind() {
        let messages = messages();
        let error = RunError::Output(OutputError::HtmlFile {
            path: "notes.html".into(),
            source: std::io::Error::other("disk full"),
        });

        let text = messages.describe(&error);
        assert!(text.starts_with(&messages.html_file_error));
        assert!(text.contains("disk full"));
    }
}
