//! Identifying the GitHub repository release notes link to.

use std::fmt;

use crate::error::GitHubError;

/// An `owner/name` pair on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubRepo {
    pub owner: String,
    pub name: String,
}

impl GitHubRepo {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    /// Parse an `OWNER/REPO` argument.
    pub fn parse(slug: &str) -> Result<Self, GitHubError> {
        match slug.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name.strip_suffix(".git").unwrap_or(name)))
            }
            _ => Err(GitHubError::InvalidRepository(slug.to_string())),
        }
    }

    /// Find the repository behind the `origin` remote of a local checkout.
    pub fn from_origin(repo: &git2::Repository) -> Result<Self, GitHubError> {
        let remote = repo
            .find_remote("origin")
            .map_err(|_| GitHubError::InvalidRepository("origin".to_string()))?;
        let url = remote
            .url()
            .ok_or_else(|| GitHubError::InvalidRepository("origin".to_string()))?;

        parse_github_remote(url)
    }
}

impl fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Extract owner and repo from a git remote URL.
pub fn parse_github_remote(url: &str) -> Result<GitHubRepo, GitHubError> {
    // Handle SSH format: git@github.com:owner/repo.git
    if let Some(path) = url.strip_prefix("git@github.com:") {
        return parse_owner_repo_path(url, path);
    }

    // Handle HTTPS format: https://github.com/owner/repo.git
    if let Some(path) = url.split("github.com/").nth(1) {
        return parse_owner_repo_path(url, path);
    }

    Err(GitHubError::InvalidRepository(url.to_string()))
}

fn parse_owner_repo_path(url: &str, path: &str) -> Result<GitHubRepo, GitHubError> {
    let path = path.strip_suffix(".git").unwrap_or(path);
    let parts: Vec<&str> = path.split('/').collect();

    if parts.len() >= 2 && !parts[0].is_empty() && !parts[1].is_empty() {
        Ok(GitHubRepo::new(parts[0], parts[1]))
    } else {
        Err(GitHubError::InvalidRepository(url.to_string()))
    }
}
