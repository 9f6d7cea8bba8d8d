//! Pull request lookup via octocrab.

use async_trait::async_trait;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GitHubError;

use super::repository::GitHubRepo;

/// The parts of a GitHub PR that release notes are built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestInfo {
    #[serde(default)]
    pub title: String,
    pub body: Option<String>,
}

/// Resolves a PR number to its title and body.
///
/// This abstraction allows mocking the GitHub API in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    async fn pull_request(&self, number: u64) -> Result<PullRequestInfo, GitHubError>;
}

/// GitHub API client scoped to one repository.
pub struct GitHubClient {
    octocrab: Octocrab,
    repo: GitHubRepo,
}

impl GitHubClient {
    /// Build a client for `repo` against the API rooted at `api_url`.
    pub fn new(api_url: &str, token: &str, repo: GitHubRepo) -> Result<Self, GitHubError> {
        let octocrab = Octocrab::builder()
            .base_uri(api_url)
            .map_err(|e| GitHubError::Transport(Box::new(e)))?
            .personal_token(token.to_string())
            .build()
            .map_err(|e| GitHubError::Transport(Box::new(e)))?;

        Ok(Self::with_client(octocrab, repo))
    }

    /// Use a pre-configured octocrab client.
    ///
    /// This allows dependency injection for testing with mock servers.
    pub fn with_client(octocrab: Octocrab, repo: GitHubRepo) -> Self {
        Self { octocrab, repo }
    }

    pub(crate) fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl PullRequestSource for GitHubClient {
    async fn pull_request(&self, number: u64) -> Result<PullRequestInfo, GitHubError> {
        let route = format!(
            "/repos/{}/{}/pulls/{}",
            self.repo.owner, self.repo.name, number
        );
        debug!(route = %route, "fetching pull request");

        self.octocrab
            .get(&route, None::<&()>)
            .await
            .map_err(|e| map_octocrab_error(e, &format!("Pull request {}", route)))
    }
}

/// Sort an octocrab failure into one of the GitHub error categories.
///
/// 403 is treated as rate limiting, matching GitHub's secondary rate limit
/// responses. 406, 422 and 5xx mean the request could not be processed.
pub(crate) fn map_octocrab_error(err: octocrab::Error, resource: &str) -> GitHubError {
    let status = match &err {
        octocrab::Error::GitHub { source, .. } => {
            Some((source.status_code.as_u16(), source.message.clone()))
        }
        _ => None,
    };

    let resource = resource.to_string();
    match status {
        Some((403 | 429, message)) => GitHubError::RateLimited { message },
        Some((401, message)) => GitHubError::Unauthorized { message },
        Some((400, message)) => GitHubError::BadRequest { message },
        Some((404, message)) => GitHubError::NotFound { resource, message },
        Some((status @ (406 | 422 | 500..=599), message)) => GitHubError::ServerError {
            resource,
            status,
            message,
        },
        Some((status, message)) => GitHubError::UnexpectedStatus {
            resource,
            status,
            message,
        },
        None => GitHubError::Transport(Box::new(err)),
    }
}
