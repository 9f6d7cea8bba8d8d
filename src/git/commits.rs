//! Lazily reading commit subjects for one commit type.

use std::path::Path;

use git2::{Repository, Sort};
use tracing::debug;

use crate::config::CommitTypeSpec;
use crate::error::GitError;
use crate::notes::SubjectOrigin;
use crate::notes::links::HASH_ID;

use super::range::{CommitRange, resolve_range};

/// A lazy, finite sequence of commit subjects.
pub type CommitSubjects<'a> = Box<dyn Iterator<Item = Result<String, GitError>> + 'a>;

/// Which subjects a commit type's section reads.
///
/// Mirrors `git log --grep="^<type>[:(]"`, plus `--grep="#[0-9]" --all-match`
/// when notes come from pull requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectFilter {
    pub conventional_name: String,
    pub require_reference: bool,
}

impl SubjectFilter {
    pub fn for_type(spec: &CommitTypeSpec, origin: SubjectOrigin) -> Self {
        Self {
            conventional_name: spec.conventional_name.clone(),
            require_reference: origin == SubjectOrigin::PullRequests,
        }
    }

    pub fn matches(&self, subject: &str) -> bool {
        let typed = subject
            .strip_prefix(self.conventional_name.as_str())
            .is_some_and(|rest| rest.starts_with(':') || rest.starts_with('('));

        typed && (!self.require_reference || HASH_ID.is_match(subject))
    }
}

/// Produces the commit subjects a section is assembled from.
pub trait CommitSource {
    /// Subjects matching `filter`, newest first.
    fn subjects(&self, filter: &SubjectFilter) -> Result<CommitSubjects<'_>, GitError>;
}

/// Commit subjects from a local repository between two references.
pub struct GitCommitSource {
    repo: Repository,
    range: CommitRange,
}

impl GitCommitSource {
    /// Open the repository at `path` and resolve `from..to` in it.
    pub fn open(path: &Path, from: &str, to: &str) -> Result<Self, GitError> {
        let repo = Repository::open(path).map_err(GitError::OpenRepository)?;
        Self::new(repo, from, to)
    }

    pub fn new(repo: Repository, from: &str, to: &str) -> Result<Self, GitError> {
        let range = resolve_range(&repo, from, to)?;
        debug!(from = %range.from_ref, to = %range.to_ref, "resolved commit range");
        Ok(Self { repo, range })
    }
}

impl CommitSource for GitCommitSource {
    fn subjects(&self, filter: &SubjectFilter) -> Result<CommitSubjects<'_>, GitError> {
        let mut revwalk = self.repo.revwalk().map_err(GitError::RevwalkError)?;

        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::TIME)
            .map_err(GitError::RevwalkError)?;
        revwalk.push(self.range.to).map_err(GitError::RevwalkError)?;
        revwalk.hide(self.range.from).map_err(GitError::RevwalkError)?;

        let filter = filter.clone();
        let subjects = revwalk.filter_map(move |oid_result| {
            let subject = oid_result
                .map_err(GitError::RevwalkError)
                .and_then(|oid| self.repo.find_commit(oid).map_err(GitError::ParseCommit))
                .map(|commit| commit.summary().unwrap_or_default().to_string());

            match subject {
                Ok(subject) if filter.matches(&subject) => Some(Ok(subject)),
                Ok(_) => None,
                Err(e) => Some(Err(e)),
            }
        });

        Ok(Box::new(subjects))
    }
}

/// Subjects already held in memory, filtered the same way as a walk.
impl CommitSource for Vec<String> {
    fn subjects(&self, filter: &SubjectFilter) -> Result<CommitSubjects<'_>, GitError> {
        let filter = filter.clone();
        Ok(Box::new(
            self.iter()
                .filter(move |subject| filter.matches(subject))
                .map(|subject| Ok::<_, GitError>(subject.clone())),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(name: &str, require_reference: bool) -> SubjectFilter {
        SubjectFilter {
            conventional_name: name.to_string(),
            require_reference,
        }
    }

    #[test]
    fn test_filter_matches_type_prefix() {
        let f = filter("fix", false);
        assert!(f.matches("fix: crash"));
        assert!(f.matches("fix(ui): crash"));
        assert!(!f.matches("fixup: crash"));
        assert!(!f.matches("feat: crash"));
        assert!(!f.matches("a fix: crash"));
        assert!(!f.matches("fix"));
    }

    #[test]
    fn test_filter_requires_reference_for_pull_requests() {
        let f = filter("fix", true);
        assert!(f.matches("fix: crash (#12)"));
        assert!(!f.matches("fix: crash"));
        assert!(!f.matches("fix: crash #x"));
    }

    #[test]
    fn test_in_memory_subjects_are_filtered() {
        let subjects = vec![
            "fix: a (#1)".to_string(),
            "feat: b".to_string(),
            "fix: c".to_string(),
        ];

        let found: Vec<String> = subjects
            .subjects(&filter("fix", false))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(found, vec!["fix: a (#1)", "fix: c"]);

        let referenced = subjects.subjects(&filter("fix", true)).unwrap().count();
        assert_eq!(referenced, 1);
    }

    #[test]
    fn test_filter_for_type() {
        let spec = CommitTypeSpec::new(0, "feat", "## Features");

        let commits = SubjectFilter::for_type(&spec, SubjectOrigin::CommitMessages);
        assert_eq!(commits, filter("feat", false));

        let prs = SubjectFilter::for_type(&spec, SubjectOrigin::PullRequests);
        assert_eq!(prs, filter("feat", true));
    }
}
