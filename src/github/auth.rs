//! GitHub token discovery.
//!
//! Resolution order:
//! 1. An explicit token passed on the command line
//! 2. `gh auth token` (gh CLI)
//! 3. GITHUB_TOKEN env var
//! 4. GH_TOKEN env var

use std::env;
use std::process::Command;

use tracing::debug;

use crate::error::GitHubError;

/// Resolve the token used for every GitHub API call.
pub fn resolve_github_token(explicit: Option<&str>) -> Result<String, GitHubError> {
    if let Some(token) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(token.to_string());
    }

    get_github_token()
}

/// Get a GitHub token from the environment.
///
/// Checks in order:
/// 1. gh CLI auth (via `gh auth token`)
/// 2. GITHUB_TOKEN environment variable
/// 3. GH_TOKEN environment variable
pub fn get_github_token() -> Result<String, GitHubError> {
    if let Some(token) = get_token_from_gh_cli() {
        debug!("using token from gh CLI");
        return Ok(token);
    }

    get_token_from_env().ok_or(GitHubError::AuthenticationFailed)
}

fn get_token_from_env() -> Option<String> {
    ["GITHUB_TOKEN", "GH_TOKEN"].into_iter().find_map(|var| {
        env::var(var).ok().filter(|token| !token.is_empty()).inspect(|_| {
            debug!(var, "using token from environment");
        })
    })
}

/// Try to get a token from the gh CLI.
fn get_token_from_gh_cli() -> Option<String> {
    let status = Command::new("gh").args(["auth", "status"]).output().ok()?;

    if !status.status.success() {
        return None;
    }

    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;

    if output.status.success() {
        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !token.is_empty() {
            return Some(token);
        }
    }

    None
}
