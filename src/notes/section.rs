//! Assembling the titled section for one commit type.

use tracing::{debug, info, warn};

use crate::config::CommitTypeSpec;
use crate::error::{GitError, NotesError};
use crate::github::{PullRequestInfo, PullRequestSource};

use super::classify::{Classification, classify};
use super::entry::format_entry;
use super::links::first_hash_id;
use super::types::{NoteSettings, RenderMode, SubjectOrigin};

/// Turns the raw subjects of one commit type into a markdown section.
pub struct SectionAssembler<'a> {
    settings: &'a NoteSettings,
    pull_requests: &'a dyn PullRequestSource,
}

impl<'a> SectionAssembler<'a> {
    pub fn new(settings: &'a NoteSettings, pull_requests: &'a dyn PullRequestSource) -> Self {
        Self {
            settings,
            pull_requests,
        }
    }

    /// Build the section for `spec` from `records`, in record order.
    ///
    /// Returns an empty string when no record produced an entry, so the
    /// section title is dropped along with it. PRs are fetched one at a time;
    /// the first failed fetch aborts the section.
    pub async fn assemble_section<I>(
        &self,
        spec: &CommitTypeSpec,
        origin: SubjectOrigin,
        mode: RenderMode,
        records: I,
    ) -> Result<String, NotesError>
    where
        I: IntoIterator<Item = Result<String, GitError>>,
    {
        let mut body = String::new();
        let mut entries = 0usize;

        for record in records {
            let subject = record.map_err(|source| NotesError::CommitSource {
                commit_type: spec.conventional_name.clone(),
                source,
            })?;

            let classification = classify(&subject, spec);
            if !classification.is_match() {
                debug!(subject = %subject, commit_type = %spec.conventional_name, "skipping unmatched subject");
                continue;
            }

            let entry = match origin {
                SubjectOrigin::CommitMessages => format_entry(
                    &subject,
                    &classification,
                    None,
                    mode,
                    self.settings.prefix(mode),
                    &self.settings.links,
                ),
                SubjectOrigin::PullRequests => {
                    let Some(number) = pull_request_number(&subject) else {
                        continue;
                    };
                    let pr = self.fetch(spec, number).await?;
                    self.format_pull_request(&pr, spec, mode)
                }
            };

            body.push_str(&entry);
            entries += 1;
        }

        if entries == 0 {
            debug!(commit_type = %spec.conventional_name, "no entries, dropping section");
            return Ok(String::new());
        }

        info!(commit_type = %spec.conventional_name, entries, "assembled section");
        Ok(format!("{}\n{}", spec.section_title, body))
    }

    /// Render a fetched PR under `spec`.
    ///
    /// The PR title is classified again to pick up its own scope; a title that
    /// no longer names the type is rendered without a subcategory.
    pub fn format_pull_request(
        &self,
        pr: &PullRequestInfo,
        spec: &CommitTypeSpec,
        mode: RenderMode,
    ) -> String {
        let classification = match classify(&pr.title, spec) {
            Classification::NoMatch => Classification::NoSubcategory,
            matched => matched,
        };

        format_entry(
            &pr.title,
            &classification,
            pr.body.as_deref(),
            mode,
            self.settings.prefix(mode),
            &self.settings.links,
        )
    }

    pub(crate) async fn fetch(
        &self,
        spec: &CommitTypeSpec,
        number: u64,
    ) -> Result<PullRequestInfo, NotesError> {
        debug!(number, commit_type = %spec.conventional_name, "resolving pull request");

        self.pull_requests
            .pull_request(number)
            .await
            .map_err(|source| NotesError::PullRequest {
                commit_type: spec.conventional_name.clone(),
                number,
                source,
            })
    }
}

/// PR number from the first `#<digits>` token of a commit subject.
fn pull_request_number(subject: &str) -> Option<u64> {
    let Some(digits) = first_hash_id(subject) else {
        warn!(subject = %subject, "no pull request reference, skipping commit");
        return None;
    };

    match digits.parse::<u64>() {
        Ok(number) => Some(number),
        Err(_) => {
            warn!(subject = %subject, "pull request reference out of range, skipping commit");
            None
        }
    }
}
