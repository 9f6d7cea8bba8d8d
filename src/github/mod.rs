//! GitHub API operations using octocrab.

pub mod auth;
pub mod markdown;
pub mod prs;
pub mod repository;

pub use auth::resolve_github_token;
pub use markdown::MarkdownRenderer;
pub use prs::{GitHubClient, PullRequestInfo, PullRequestSource};
pub use repository::{GitHubRepo, parse_github_remote};
