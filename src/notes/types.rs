//! Shared release-note types.

use crate::config::Config;

use super::links::LinkTargets;

/// How much of each change is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Title-only bullet entries.
    #[default]
    Short,
    /// Titles plus the indented, link-rewritten PR body.
    Full,
}

/// Where the text of each release note comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseNoteSource {
    /// Commit subjects, used as-is.
    CommitMessages,
    /// The pull request referenced by `#<number>` in each commit subject.
    PullRequests,
    /// One pull request, rendered on its own.
    SinglePullRequest(u64),
}

/// What a commit subject in a section stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectOrigin {
    /// The subject is the note.
    CommitMessages,
    /// The subject references the pull request that is the note.
    PullRequests,
}

/// Rendering settings taken from configuration and the target repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSettings {
    pub short_prefix: String,
    pub full_prefix: String,
    pub links: LinkTargets,
}

impl NoteSettings {
    pub fn new(config: &Config, links: LinkTargets) -> Self {
        Self {
            short_prefix: config.markdown_release_note_prefix.clone(),
            full_prefix: config.markdown_full_mode_release_note_prefix.clone(),
            links,
        }
    }

    /// Title prefix for the given mode.
    pub fn prefix(&self, mode: RenderMode) -> &str {
        match mode {
            RenderMode::Short => &self.short_prefix,
            RenderMode::Full => &self.full_prefix,
        }
    }
}

