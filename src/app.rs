//! One generation run, from parsed arguments to files on disk.

use std::path::Path;
use std::process::ExitCode;

use git2::Repository;
use tracing::debug;

use crate::cli::{Cli, RunRequest, resolve_repository, resolve_request};
use crate::config::Config;
use crate::error::{GitError, InputError, RunError};
use crate::git::{CommitSource, GitCommitSource};
use crate::github::{GitHubClient, resolve_github_token};
use crate::notes::{LinkTargets, NoteSettings, ReleaseDocumentBuilder};
use crate::output::{DocumentSink, FileSink};

/// A validated run, ready to generate.
pub struct Generation<'a> {
    config: &'a Config,
    request: RunRequest,
    client: GitHubClient,
    settings: NoteSettings,
    /// Opened eagerly but only required when a commit range is read.
    checkout: Result<Repository, GitError>,
    sink: FileSink,
}

impl<'a> Generation<'a> {
    /// Validate the arguments, find a token and identify the repository.
    ///
    /// `workdir` is where the local checkout is looked for and what a relative
    /// output directory is resolved against.
    pub fn prepare(cli: &Cli, config: &'a Config, workdir: &Path) -> Result<Self, RunError> {
        let request = resolve_request(cli, &config.input_names)?;

        let token =
            resolve_github_token(cli.token.as_deref()).map_err(|_| InputError::NoGithubToken)?;

        let checkout = Repository::open(workdir).map_err(GitError::OpenRepository);
        let repo = resolve_repository(cli.repository.as_deref(), checkout.as_ref().ok())?;
        debug!(owner = %repo.owner, name = %repo.name, "target repository");

        let client = GitHubClient::new(&config.github_api_url, &token, repo.clone())?;
        let links = LinkTargets::for_repository(&config.github_url, &repo.owner, &repo.name);
        let settings = NoteSettings::new(config, links);
        let sink = FileSink::new(
            &workdir.join(&cli.output_dir),
            &config.markdown_output_file_name,
            &config.html_output_file_name,
        );

        Ok(Self {
            config,
            request,
            client,
            settings,
            checkout,
            sink,
        })
    }

    /// Build both documents and write them, returning where they went.
    pub async fn run(self) -> Result<FileSink, RunError> {
        let Self {
            config,
            request,
            client,
            settings,
            checkout,
            sink,
        } = self;

        // A single PR reads no history, so it also works outside a checkout
        let commits: Box<dyn CommitSource> = match &request.range {
            Some(range) => Box::new(GitCommitSource::new(checkout?, &range.from, &range.to)?),
            None => Box::new(Vec::<String>::new()),
        };

        let builder = ReleaseDocumentBuilder::new(
            &config.commit_types,
            &settings,
            commits.as_ref(),
            &client,
            &client,
        );
        let document = builder.build(request.source, request.mode).await?;

        sink.write(&document)?;
        Ok(sink)
    }
}

/// Process exit status for a finished run.
pub fn exit_code<T>(result: &Result<T, RunError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
