//! Building the full release-notes document.

use tracing::{debug, info};

use crate::config::CommitTypeSpec;
use crate::error::NotesError;
use crate::git::{CommitSource, SubjectFilter};
use crate::github::{MarkdownRenderer, PullRequestSource};

use super::classify::classify;
use super::section::SectionAssembler;
use super::types::{NoteSettings, ReleaseNoteSource, RenderMode, SubjectOrigin};

/// A finished document in both output formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDocument {
    pub markdown: String,
    pub html: String,
}

/// Drives section assembly over every configured commit type.
pub struct ReleaseDocumentBuilder<'a> {
    registry: &'a [CommitTypeSpec],
    commits: &'a dyn CommitSource,
    renderer: &'a dyn MarkdownRenderer,
    sections: SectionAssembler<'a>,
}

impl<'a> ReleaseDocumentBuilder<'a> {
    pub fn new(
        registry: &'a [CommitTypeSpec],
        settings: &'a NoteSettings,
        commits: &'a dyn CommitSource,
        pull_requests: &'a dyn PullRequestSource,
        renderer: &'a dyn MarkdownRenderer,
    ) -> Self {
        Self {
            registry,
            commits,
            renderer,
            sections: SectionAssembler::new(settings, pull_requests),
        }
    }

    /// Build the markdown document and convert it to HTML.
    ///
    /// Nothing is converted when no section has content.
    pub async fn build(
        &self,
        source: ReleaseNoteSource,
        mode: RenderMode,
    ) -> Result<ReleaseDocument, NotesError> {
        let markdown = match source {
            ReleaseNoteSource::CommitMessages => {
                self.build_markdown(SubjectOrigin::CommitMessages, mode).await?
            }
            ReleaseNoteSource::PullRequests => {
                self.build_markdown(SubjectOrigin::PullRequests, mode).await?
            }
            ReleaseNoteSource::SinglePullRequest(number) => {
                self.single_pull_request(number).await?
            }
        };

        let html = self
            .renderer
            .render_html(&markdown)
            .await
            .map_err(NotesError::HtmlConversion)?;

        info!(
            markdown_bytes = markdown.len(),
            html_bytes = html.len(),
            "release notes generated"
        );

        Ok(ReleaseDocument { markdown, html })
    }

    /// Concatenate every non-empty section in registry order.
    ///
    /// Each present section is preceded by a blank line.
    pub async fn build_markdown(
        &self,
        origin: SubjectOrigin,
        mode: RenderMode,
    ) -> Result<String, NotesError> {
        let mut document = String::new();

        for spec in self.registry {
            let filter = SubjectFilter::for_type(spec, origin);
            let records =
                self.commits
                    .subjects(&filter)
                    .map_err(|source| NotesError::CommitSource {
                        commit_type: spec.conventional_name.clone(),
                        source,
                    })?;

            let section = self
                .sections
                .assemble_section(spec, origin, mode, records)
                .await?;

            if !section.is_empty() {
                document.push('\n');
                document.push_str(&section);
            }
        }

        if document.is_empty() {
            return Err(NotesError::EmptyReleaseNotes);
        }

        Ok(document)
    }

    /// Notes for one pull request, always in full mode.
    ///
    /// The entry lands under the first commit type its title matches; with no
    /// match it is rendered bare.
    async fn single_pull_request(&self, number: u64) -> Result<String, NotesError> {
        let Some(fallback) = self.registry.first() else {
            return Err(NotesError::EmptyReleaseNotes);
        };

        let pr = self.sections.fetch(fallback, number).await?;
        let matched = self
            .registry
            .iter()
            .find(|spec| classify(&pr.title, spec).is_match());

        match matched {
            Some(spec) => {
                debug!(number, commit_type = %spec.conventional_name, "single pull request classified");
                let entry = self.sections.format_pull_request(&pr, spec, RenderMode::Full);
                Ok(format!("\n{}\n{}", spec.section_title, entry))
            }
            None => {
                debug!(number, "single pull request matches no commit type");
                let entry = self
                    .sections
                    .format_pull_request(&pr, fallback, RenderMode::Full);
                Ok(format!("\n{}", entry))
            }
        }
    }
}
