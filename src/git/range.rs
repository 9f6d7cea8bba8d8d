//! Commit range resolution.

use git2::{Oid, Repository};

use crate::error::GitError;

/// Resolved commit range with start and end OIDs.
#[derive(Debug, Clone)]
pub struct CommitRange {
    pub from: Oid,
    pub to: Oid,
    pub from_ref: String,
    pub to_ref: String,
}

/// Resolve the `from..to` range between two user-provided references.
///
/// `from` is excluded from the range, like the left side of `git log from..to`.
pub fn resolve_range(repo: &Repository, from: &str, to: &str) -> Result<CommitRange, GitError> {
    Ok(CommitRange {
        from: resolve_reference(repo, from)?,
        to: resolve_reference(repo, to)?,
        from_ref: from.to_string(),
        to_ref: to.to_string(),
    })
}

/// Resolve a reference (tag, branch, commit hash) to an OID.
pub fn resolve_reference(repo: &Repository, reference: &str) -> Result<Oid, GitError> {
    // Try as a direct OID first
    if let Ok(oid) = Oid::from_str(reference)
        && repo.find_commit(oid).is_ok()
    {
        return Ok(oid);
    }

    // Try as a revspec (branch, tag, HEAD~2, ...)
    match repo.revparse_single(reference) {
        Ok(obj) => Ok(obj.peel_to_commit().map_err(GitError::ParseCommit)?.id()),
        Err(e) => Err(GitError::ReferenceNotFound(reference.to_string(), e)),
    }
}
