//! Markdown to HTML conversion through the GitHub markdown API.

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::error::GitHubError;

use super::prs::{GitHubClient, map_octocrab_error};

/// Converts a markdown document to HTML.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarkdownRenderer: Send + Sync {
    async fn render_html(&self, markdown: &str) -> Result<String, GitHubError>;
}

/// Body of `POST /markdown`.
#[derive(Serialize)]
struct RenderRequest<'a> {
    text: &'a str,
    mode: &'static str,
}

#[async_trait]
impl MarkdownRenderer for GitHubClient {
    async fn render_html(&self, markdown: &str) -> Result<String, GitHubError> {
        debug!(bytes = markdown.len(), "rendering markdown");

        let request = RenderRequest {
            text: markdown,
            mode: "markdown",
        };
        let map_err = |e: octocrab::Error| map_octocrab_error(e, "Markdown API");

        let response = self
            .octocrab()
            ._post("/markdown", Some(&request))
            .await
            .map_err(map_err)?;
        let response = octocrab::map_github_error(response)
            .await
            .map_err(map_err)?;

        self.octocrab()
            .body_to_string(response)
            .await
            .map_err(map_err)
    }
}
